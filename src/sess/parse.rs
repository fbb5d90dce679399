use super::CommandError;

/// A request read from one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Req {
    /// `moves <code> <row> <col>`
    Moves { code: String, row: u8, col: u8 },
    /// `place <code> <row> <col> <new_row> <new_col>`
    Place {
        code: String,
        row: u8,
        col: u8,
        new_row: u8,
        new_col: u8,
    },
    /// `board`: the label grid
    Board,
    /// `show`: the pretty-printed position
    Show,
    /// `new`
    NewGame,
    /// `import <text>`, where the text runs to the end of the line
    Import(String),
    /// `perft <depth>`
    Perft(usize),
    /// `quit`
    Quit,
}

/// The reserved keywords which start a request.
#[derive(Copy, Clone, Debug)]
enum Keyword {
    Moves,
    Place,
    Board,
    Show,
    New,
    Import,
    Perft,
    Quit,
}

impl Keyword {
    fn scan(tok: &str) -> Option<Self> {
        match tok {
            "moves" => Some(Keyword::Moves),
            "place" => Some(Keyword::Place),
            "board" => Some(Keyword::Board),
            "show" => Some(Keyword::Show),
            "new" => Some(Keyword::New),
            "import" => Some(Keyword::Import),
            "perft" => Some(Keyword::Perft),
            "quit" | "exit" => Some(Keyword::Quit),
            _ => None,
        }
    }
}

/// Parses a single line of input into a `Req`.
pub fn parse(line: &str) -> Result<Req, CommandError> {
    Parser::new(line).parse_command()
}

struct Parser<'a> {
    line: &'a str,
    toks: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            toks: line.split_whitespace().collect(),
            cursor: 0,
        }
    }

    fn advance(&mut self) -> Option<&'a str> {
        let tok = self.toks.get(self.cursor).copied();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn expect(&mut self, what: &'static str) -> Result<&'a str, CommandError> {
        self.advance().ok_or(CommandError::MissingArgument(what))
    }

    fn number<T: std::str::FromStr>(&mut self, what: &'static str) -> Result<T, CommandError> {
        let tok = self.expect(what)?;
        tok.parse()
            .map_err(|_| CommandError::BadNumber(tok.to_string()))
    }

    fn finish(&mut self, req: Req) -> Result<Req, CommandError> {
        match self.advance() {
            Some(tok) => Err(CommandError::UnexpectedToken(tok.to_string())),
            None => Ok(req),
        }
    }

    fn parse_command(&mut self) -> Result<Req, CommandError> {
        let tok = self.advance().ok_or(CommandError::NoInput)?;
        let keyword =
            Keyword::scan(tok).ok_or_else(|| CommandError::UnknownCommand(tok.to_string()))?;

        let req = match keyword {
            Keyword::Moves => Req::Moves {
                code: self.expect("piece")?.to_string(),
                row: self.number("row")?,
                col: self.number("column")?,
            },
            Keyword::Place => Req::Place {
                code: self.expect("piece")?.to_string(),
                row: self.number("row")?,
                col: self.number("column")?,
                new_row: self.number("new row")?,
                new_col: self.number("new column")?,
            },
            Keyword::Board => Req::Board,
            Keyword::Show => Req::Show,
            Keyword::New => Req::NewGame,
            Keyword::Import => {
                // Everything after the keyword is the description, spacing included.
                let rest = self.line.trim_start()[tok.len()..].trim();
                return Ok(Req::Import(rest.to_string()));
            }
            Keyword::Perft => Req::Perft(self.number("depth")?),
            Keyword::Quit => Req::Quit,
        };
        self.finish(req)
    }
}
