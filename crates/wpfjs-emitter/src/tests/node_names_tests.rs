use crate::error::EmitError;
use crate::node_names::NodeNameList;

#[test]
fn test_names_keep_order() {
    let names = NodeNameList::new(["slider", "label", "_play$"]).unwrap();
    assert_eq!(names.len(), 3);
    assert_eq!(
        names.iter().collect::<Vec<_>>(),
        vec!["slider", "label", "_play$"]
    );
}

#[test]
fn test_duplicate_name_rejected() {
    let err = NodeNameList::new(["slider", "slider"]).unwrap_err();
    assert_eq!(
        err,
        EmitError::DuplicateNodeName {
            name: "slider".to_string()
        }
    );
}

#[test]
fn test_invalid_names_rejected() {
    for bad in ["", "1st", "my-button", "a b", "größe-Slider"] {
        let err = NodeNameList::new([bad]).unwrap_err();
        assert!(
            matches!(err, EmitError::InvalidNodeName { .. }),
            "{bad:?} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_empty_list() {
    assert!(NodeNameList::empty().is_empty());
    assert!(NodeNameList::new(Vec::<String>::new()).unwrap().is_empty());
}

#[test]
fn test_unicode_names_accepted() {
    let names = NodeNameList::new(["größeSlider", "ボタン", "_ñ$1"]).unwrap();
    assert_eq!(
        names.iter().collect::<Vec<_>>(),
        vec!["größeSlider", "ボタン", "_ñ$1"]
    );
}
