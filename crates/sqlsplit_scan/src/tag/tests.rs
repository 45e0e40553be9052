use super::*;

// === Classification ===

#[test]
fn whitespace_class() {
    assert!(RawTag::Whitespace.is_whitespace());
    assert!(RawTag::Newline.is_whitespace());
    assert!(!RawTag::Word.is_whitespace());
    assert!(!RawTag::LineComment.is_whitespace());
}

#[test]
fn comment_class() {
    assert!(RawTag::LineComment.is_comment());
    assert!(RawTag::BlockComment.is_comment());
    assert!(!RawTag::Whitespace.is_comment());
    assert!(!RawTag::String.is_comment());
}

#[test]
fn trivia_class() {
    assert!(RawTag::Whitespace.is_trivia());
    assert!(RawTag::Newline.is_trivia());
    assert!(RawTag::LineComment.is_trivia());
    assert!(RawTag::BlockComment.is_trivia());

    assert!(!RawTag::Word.is_trivia());
    assert!(!RawTag::String.is_trivia());
    assert!(!RawTag::QuotedIdent.is_trivia());
    assert!(!RawTag::Punct.is_trivia());
    assert!(!RawTag::Other.is_trivia());
    assert!(!RawTag::Eof.is_trivia());
}

// === Representation ===

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

#[test]
fn raw_token_is_two_words_max() {
    assert!(std::mem::size_of::<RawToken>() <= 8);
}
