use crate::trivia::*;

#[test]
fn test_blank_trivia() {
    assert!(Trivia::empty().is_blank());
    assert!(Trivia::new("\r\n\t  ").is_blank());
    assert!(!Trivia::new("  // note\n").is_blank());
}

#[test]
fn test_trim_end_keeps_leading_newlines() {
    let trivia = Trivia::new("\n    // Handles the tick\n    ");
    assert_eq!(trivia.trim_end(), "\n    // Handles the tick");
}

#[test]
fn test_comment_detection() {
    assert!(Trivia::new("  // first\n  ").has_comments());
    assert!(Trivia::new(" /* status */").has_comments());
    assert!(Trivia::new("\r\n    /// <summary>Doc</summary>\r\n").has_comments());
    assert!(!Trivia::new("\n\n    ").has_comments());
    assert!(!Trivia::empty().has_comments());
}

#[test]
fn test_split_leading_breaks() {
    assert_eq!(
        Trivia::new("\n\n    // note\n    ").split_leading_breaks(),
        (2, "    // note\n    ")
    );
    assert_eq!(Trivia::new("\r\n\r\n\t").split_leading_breaks(), (2, ""));
    assert_eq!(Trivia::new("  #region A").split_leading_breaks(), (0, "  #region A"));
    assert_eq!(Trivia::empty().split_leading_breaks(), (0, ""));
}

#[test]
fn test_directives_are_not_comments() {
    let trivia = Trivia::new("#region Fields\n");
    assert!(!trivia.has_comments());
    assert!(!trivia.is_blank());
    assert!(!Trivia::new("#if DEBUG // trace\n").has_comments());
}

#[test]
fn test_trivia_serializes_as_plain_string() {
    let trivia = Trivia::new(" ");
    assert_eq!(serde_json::to_string(&trivia).unwrap(), "\" \"");
    let back: Trivia = serde_json::from_str("\"\\n\"").unwrap();
    assert_eq!(back.as_str(), "\n");
}
