use crate::element::Element;
use crate::smiles::error::SmilesError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Atom(AtomToken),
    Bond { bond: BondToken, pos: usize },
    RingClosure { digit: u16, pos: usize },
    OpenParen(usize),
    CloseParen(usize),
    Dot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomToken {
    pub element: Element,
    pub is_aromatic: bool,
    pub isotope: u16,
    /// `Some` only for bracket atoms, where the count is always explicit.
    pub hcount: Option<u8>,
    pub charge: i8,
    pub pos: usize,
}

impl AtomToken {
    pub fn is_bracket(&self) -> bool {
        self.hcount.is_some()
    }
}

/// Bond symbols. Directional `/` and `\` are read as plain single bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondToken {
    Single,
    Double,
    Triple,
    Aromatic,
}

const ORGANIC_TWO_LETTER: [(&str, Element); 2] = [("Cl", Element::Cl), ("Br", Element::Br)];

pub fn tokenize(input: &str) -> Result<Vec<Token>, SmilesError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            ' ' | '\t' | '\r' | '\n' => i += 1,
            '[' => {
                let (tok, next) = parse_bracket_atom(&chars, i)?;
                tokens.push(Token::Atom(tok));
                i = next;
            }
            '-' | '/' | '\\' => {
                tokens.push(Token::Bond { bond: BondToken::Single, pos: i });
                i += 1;
            }
            '=' => {
                tokens.push(Token::Bond { bond: BondToken::Double, pos: i });
                i += 1;
            }
            '#' => {
                tokens.push(Token::Bond { bond: BondToken::Triple, pos: i });
                i += 1;
            }
            ':' => {
                tokens.push(Token::Bond { bond: BondToken::Aromatic, pos: i });
                i += 1;
            }
            '(' => {
                tokens.push(Token::OpenParen(i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen(i));
                i += 1;
            }
            '.' => {
                tokens.push(Token::Dot(i));
                i += 1;
            }
            '%' => {
                let tens = chars.get(i + 1).and_then(|c| c.to_digit(10));
                let ones = chars.get(i + 2).and_then(|c| c.to_digit(10));
                match (tens, ones) {
                    (Some(t), Some(o)) => {
                        tokens.push(Token::RingClosure {
                            digit: (t * 10 + o) as u16,
                            pos: i,
                        });
                        i += 3;
                    }
                    _ => return Err(SmilesError::UnexpectedChar { pos: i, ch }),
                }
            }
            '0'..='9' => {
                tokens.push(Token::RingClosure {
                    digit: ch as u16 - '0' as u16,
                    pos: i,
                });
                i += 1;
            }
            _ => {
                let (tok, width) = parse_organic_atom(&chars, i)?;
                tokens.push(Token::Atom(tok));
                i += width;
            }
        }
    }

    Ok(tokens)
}

fn parse_organic_atom(chars: &[char], pos: usize) -> Result<(AtomToken, usize), SmilesError> {
    let ch = chars[pos];
    if let Some(&next) = chars.get(pos + 1) {
        let pair: String = [ch, next].iter().collect();
        if let Some(&(_, element)) = ORGANIC_TWO_LETTER.iter().find(|(sym, _)| *sym == pair) {
            return Ok((bare_atom(element, false, pos), 2));
        }
    }

    let (element, aromatic) = match ch {
        'B' => (Element::B, false),
        'C' => (Element::C, false),
        'N' => (Element::N, false),
        'O' => (Element::O, false),
        'P' => (Element::P, false),
        'S' => (Element::S, false),
        'F' => (Element::F, false),
        'I' => (Element::I, false),
        'b' => (Element::B, true),
        'c' => (Element::C, true),
        'n' => (Element::N, true),
        'o' => (Element::O, true),
        'p' => (Element::P, true),
        's' => (Element::S, true),
        _ => return Err(SmilesError::UnexpectedChar { pos, ch }),
    };
    Ok((bare_atom(element, aromatic, pos), 1))
}

fn bare_atom(element: Element, is_aromatic: bool, pos: usize) -> AtomToken {
    AtomToken {
        element,
        is_aromatic,
        isotope: 0,
        hcount: None,
        charge: 0,
        pos,
    }
}

fn parse_bracket_atom(chars: &[char], start: usize) -> Result<(AtomToken, usize), SmilesError> {
    let mut i = start + 1;

    let isotope = parse_number(chars, &mut i, start)?.unwrap_or(0);
    let (element, is_aromatic) = parse_bracket_element(chars, &mut i, start)?;
    skip_chirality(chars, &mut i);
    let hcount = parse_hcount(chars, &mut i, start)?;
    let charge = parse_charge(chars, &mut i, start)?;
    if chars.get(i) == Some(&':') {
        i += 1;
        parse_number(chars, &mut i, start)?;
    }

    if chars.get(i) != Some(&']') {
        return Err(SmilesError::UnclosedBracket { pos: start });
    }

    Ok((
        AtomToken {
            element,
            is_aromatic,
            isotope,
            hcount: Some(hcount),
            charge,
            pos: start,
        },
        i + 1,
    ))
}

fn parse_number(chars: &[char], i: &mut usize, start: usize) -> Result<Option<u16>, SmilesError> {
    let mut value: Option<u16> = None;
    while let Some(d) = chars.get(*i).and_then(|c| c.to_digit(10)) {
        let next = value
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as u16))
            .ok_or(SmilesError::NumericOverflow { pos: start })?;
        value = Some(next);
        *i += 1;
    }
    Ok(value)
}

fn parse_bracket_element(
    chars: &[char],
    i: &mut usize,
    start: usize,
) -> Result<(Element, bool), SmilesError> {
    let first = *chars.get(*i).ok_or(SmilesError::UnclosedBracket { pos: start })?;
    let second = chars.get(*i + 1).copied();

    if first.is_ascii_lowercase() {
        let aromatic: &[(&str, Element)] = &[
            ("se", Element::Se),
            ("te", Element::Te),
            ("as", Element::As),
            ("b", Element::B),
            ("c", Element::C),
            ("n", Element::N),
            ("o", Element::O),
            ("p", Element::P),
            ("s", Element::S),
        ];
        for &(sym, element) in aromatic {
            if chars[*i..].iter().take(sym.len()).copied().eq(sym.chars()) {
                *i += sym.len();
                return Ok((element, true));
            }
        }
    } else if first.is_ascii_uppercase() {
        if let Some(second) = second.filter(char::is_ascii_lowercase) {
            let sym: String = [first, second].iter().collect();
            if let Some(element) = Element::from_symbol(&sym) {
                *i += 2;
                return Ok((element, false));
            }
        }
        if let Some(element) = Element::from_symbol(&first.to_string()) {
            *i += 1;
            return Ok((element, false));
        }
    }

    Err(SmilesError::InvalidElement {
        pos: *i,
        text: first.to_string(),
    })
}

fn skip_chirality(chars: &[char], i: &mut usize) {
    while chars.get(*i) == Some(&'@') {
        *i += 1;
    }
}

fn parse_hcount(chars: &[char], i: &mut usize, start: usize) -> Result<u8, SmilesError> {
    if chars.get(*i) != Some(&'H') {
        return Ok(0);
    }
    *i += 1;
    match parse_number(chars, i, start)? {
        Some(n) => u8::try_from(n).map_err(|_| SmilesError::NumericOverflow { pos: start }),
        None => Ok(1),
    }
}

fn parse_charge(chars: &[char], i: &mut usize, start: usize) -> Result<i8, SmilesError> {
    let sign: i8 = match chars.get(*i) {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Ok(0),
    };
    let symbol = chars[*i];
    *i += 1;

    if let Some(magnitude) = parse_number(chars, i, start)? {
        return i8::try_from(magnitude)
            .map(|m| sign * m)
            .map_err(|_| SmilesError::InvalidCharge { pos: start });
    }

    let mut magnitude: i8 = 1;
    while chars.get(*i) == Some(&symbol) {
        magnitude = magnitude
            .checked_add(1)
            .ok_or(SmilesError::InvalidCharge { pos: start })?;
        *i += 1;
    }
    Ok(sign * magnitude)
}
