use tiny::lang::{lex, Kind, Token};

fn kinds(tokens: &[Token]) -> Vec<Kind> {
    tokens.iter().map(|t| t.kind()).collect()
}

#[test]
fn test_statement_tokens() {
    use Kind::*;
    let tokens = lex("for i := 0 to 10:").unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![For, Name, Assign, Number, To, Number, Colon, Eof]
    );
    assert_eq!(tokens[1].to_string(), "i");
    assert_eq!(tokens[5].to_string(), "10");
}

#[test]
fn test_line_numbers() {
    let tokens = lex("program t:\n{ a\nb }\n  print x_1\n").unwrap();
    let lines: Vec<(Kind, usize)> = tokens.iter().map(|t| (t.kind(), t.line())).collect();
    assert_eq!(
        lines,
        vec![
            (Kind::Program, 1),
            (Kind::Name, 1),
            (Kind::Colon, 1),
            (Kind::Newline, 1),
            (Kind::Comment, 2),
            (Kind::Newline, 3),
            (Kind::Print, 4),
            (Kind::Name, 4),
            (Kind::Newline, 4),
            (Kind::Eof, 5),
        ]
    );
}

#[test]
fn test_reserved_words() {
    use Kind::*;
    let tokens = lex("then do and or not var").unwrap();
    assert_eq!(kinds(&tokens), vec![Then, Do, And, Or, Not, Var, Eof]);
}

#[test]
fn test_digits_then_letters() {
    use Kind::*;
    let tokens = lex("12ab").unwrap();
    assert_eq!(kinds(&tokens), vec![Number, Name, Eof]);
}
