use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

lazy_static! {
    /// C reserved words plus a curated set of common standard-library
    /// function names. The flat set is intentional: this classifier treats
    /// well-known library calls as keywords rather than resolving them
    /// against declarations.
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in [
            "if", "else", "switch", "case", "default", "for", "while", "do",
            "break", "continue", "goto", "main", "return",
            "int", "char", "float", "double", "void", "_Bool",
            "short", "long", "signed", "unsigned",
            "auto", "static", "extern", "register",
            "const", "volatile", "restrict",
            "struct", "union", "enum", "typedef",
            "sizeof", "inline", "_Alignas", "_Alignof", "_Atomic", "_Generic",
            "_Noreturn", "_Static_assert", "_Thread_local",
            "printf", "scanf", "gets", "puts", "fgets", "fputs",
            "malloc", "calloc", "realloc", "free",
            "exit", "atoi", "atof", "strlen", "strcpy", "strncpy", "strcat",
            "strcmp",
            "fopen", "fclose", "fread", "fwrite", "fprintf", "fscanf",
        ] {
            set.insert(word);
        }
        set
    };

    /// One- and two-character operator spellings mapped to descriptive labels.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("+", "Arithmetic Plus");
        map.insert("-", "Arithmetic Minus");
        map.insert("*", "Arithmetic Multiply");
        map.insert("/", "Arithmetic Divide");
        map.insert("%", "Arithmetic Modulus");
        map.insert("++", "Arithmetic Increment");
        map.insert("--", "Arithmetic Decrement");
        map.insert("==", "Relational Equal to");
        map.insert("!=", "Relational Not equal to");
        map.insert(">", "Relational Greater than");
        map.insert("<", "Relational Less than");
        map.insert(">=", "Relational Greater than or equal to");
        map.insert("<=", "Relational Less than or equal to");
        map.insert("&&", "Logical AND");
        map.insert("||", "Logical OR");
        map.insert("!", "Logical NOT");
        map.insert("=", "Assignment");
        map.insert("+=", "Assignment Add and assign");
        map.insert("-=", "Assignment Subtract and assign");
        map.insert("*=", "Assignment Multiply and assign");
        map.insert("/=", "Assignment Divide and assign");
        map.insert("%=", "Assignment Modulus and assign");
        map.insert("&", "Bitwise AND");
        map.insert("|", "Bitwise OR");
        map.insert("^", "Bitwise XOR");
        map.insert("~", "Bitwise NOT");
        map.insert("<<", "Bitwise Left shift");
        map.insert(">>", "Bitwise Right shift");
        map
    };

    /// Delimiter characters mapped to descriptive labels. Disjoint from the
    /// operator spellings so a character never double-matches.
    pub static ref DELIMITER_LOOKUP: HashMap<char, &'static str> = {
        let mut map = HashMap::new();
        map.insert(';', "Semicolon");
        map.insert(',', "Comma");
        map.insert('(', "Left Parenthesis");
        map.insert(')', "Right Parenthesis");
        map.insert('{', "Left Brace");
        map.insert('}', "Right Brace");
        map.insert('[', "Left Bracket");
        map.insert(']', "Right Bracket");
        map
    };
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

pub fn operator_label(spelling: &str) -> Option<&'static str> {
    OPERATOR_LOOKUP.get(spelling).copied()
}

pub fn delimiter_label(ch: char) -> Option<&'static str> {
    DELIMITER_LOOKUP.get(&ch).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Number,
    Identifier,
    Operator,
    Delimiter,
    Unknown,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub category: Category,
    pub subcategory: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subcategory {
            Some(subcategory) => {
                write!(f, "{} ({}: {})", self.lexeme, self.category, subcategory)
            }
            None => write!(f, "{} ({})", self.lexeme, self.category),
        }
    }
}

impl Token {
    /// A keyword, number or identifier token. The subcategory repeats the
    /// lexeme as its tag.
    pub fn word(lexeme: String, category: Category) -> Token {
        let subcategory = Some(lexeme.clone());
        Token {
            lexeme,
            category,
            subcategory,
        }
    }

    pub fn operator(spelling: String, label: &str) -> Token {
        Token {
            lexeme: spelling,
            category: Category::Operator,
            subcategory: Some(String::from(label)),
        }
    }

    pub fn delimiter(ch: char, label: &str) -> Token {
        Token {
            lexeme: ch.to_string(),
            category: Category::Delimiter,
            subcategory: Some(String::from(label)),
        }
    }

    pub fn unknown(lexeme: String) -> Token {
        Token {
            lexeme,
            category: Category::Unknown,
            subcategory: None,
        }
    }
}
