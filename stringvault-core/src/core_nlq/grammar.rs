/*
    grammar.rs - Phrase template table

    The recognized grammar is closed. Each template is a sequence of
    token predicates plus the filter assignments a match produces, so
    adding a phrase is a data change, not new control flow.
*/

/// One token position in a phrase template.
#[derive(Debug, Clone, Copy)]
pub enum Tok {
    /// Exact word
    Lit(&'static str),
    /// Any one of the listed words
    OneOf(&'static [&'static str]),
    /// Non-negative integer literal, captured
    Number,
    /// Single alphabetic character, captured
    Letter,
}

/// Filter assignment produced by a matched template.
#[derive(Debug, Clone, Copy)]
pub enum Assign {
    Palindrome(bool),
    WordCount(usize),
    /// Captured number is an exclusive bound: "longer than 10" means 11+
    MinLengthBeyondNumber,
    ContainsChar(char),
    ContainsCapturedLetter,
}

pub struct Template {
    pub pattern: &'static [Tok],
    pub assigns: &'static [Assign],
}

/// Templates in priority order; the first one to match the whole token
/// stream wins.
pub const TEMPLATES: &[Template] = &[
    // "all single word palindromic strings" ("palindrome" also accepted)
    Template {
        pattern: &[
            Tok::Lit("all"),
            Tok::Lit("single"),
            Tok::Lit("word"),
            Tok::OneOf(&["palindromic", "palindrome"]),
            Tok::Lit("strings"),
        ],
        assigns: &[Assign::WordCount(1), Assign::Palindrome(true)],
    },
    // "strings longer than <N> characters"
    Template {
        pattern: &[
            Tok::Lit("strings"),
            Tok::Lit("longer"),
            Tok::Lit("than"),
            Tok::Number,
            Tok::Lit("characters"),
        ],
        assigns: &[Assign::MinLengthBeyondNumber],
    },
    // "palindromic strings that contain the first vowel"
    Template {
        pattern: &[
            Tok::Lit("palindromic"),
            Tok::Lit("strings"),
            Tok::Lit("that"),
            Tok::Lit("contain"),
            Tok::Lit("the"),
            Tok::Lit("first"),
            Tok::Lit("vowel"),
        ],
        assigns: &[Assign::Palindrome(true), Assign::ContainsChar('a')],
    },
    // "strings containing the letter <C>"
    Template {
        pattern: &[
            Tok::Lit("strings"),
            Tok::Lit("containing"),
            Tok::Lit("the"),
            Tok::Lit("letter"),
            Tok::Letter,
        ],
        assigns: &[Assign::ContainsCapturedLetter],
    },
    // "strings containing <C>"
    Template {
        pattern: &[
            Tok::Lit("strings"),
            Tok::Lit("containing"),
            Tok::Letter,
        ],
        assigns: &[Assign::ContainsCapturedLetter],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_capturing_assign_has_a_capturing_token() {
        for (position, template) in TEMPLATES.iter().enumerate() {
            let has_number = template
                .pattern
                .iter()
                .any(|tok| matches!(tok, Tok::Number));
            let has_letter = template
                .pattern
                .iter()
                .any(|tok| matches!(tok, Tok::Letter));

            for assign in template.assigns {
                match assign {
                    Assign::MinLengthBeyondNumber => {
                        assert!(has_number, "template {position} captures no number")
                    }
                    Assign::ContainsCapturedLetter => {
                        assert!(has_letter, "template {position} captures no letter")
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_every_template_produces_at_least_one_assignment() {
        for (position, template) in TEMPLATES.iter().enumerate() {
            assert!(
                !template.assigns.is_empty(),
                "template {position} would accept a query without deriving filters"
            );
        }
    }
}
