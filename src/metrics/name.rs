/// Prefix the training history uses for validation-scoped metrics.
pub const VALIDATION_PREFIX: &str = "val_";

/// `accuracy` -> `val_accuracy`.
pub fn validation_key(name: &str) -> String {
    format!("{VALIDATION_PREFIX}{name}")
}

pub fn is_validation_key(name: &str) -> bool {
    name.starts_with(VALIDATION_PREFIX)
}

/// Human-readable row label: underscores become spaces and every word is
/// title-cased, e.g. `sparse_categorical_accuracy` -> `Sparse Categorical Accuracy`.
///
/// A letter is upper-cased when it does not follow another letter, so
/// `top5_acc` becomes `Top5Acc`.
pub fn display_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            label.push(c);
            prev_is_letter = false;
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_key() {
        assert_eq!(validation_key("loss"), "val_loss");
        assert!(is_validation_key("val_accuracy"));
        assert!(!is_validation_key("validity"));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("loss"), "Loss");
        assert_eq!(display_label("sparse_categorical_accuracy"), "Sparse Categorical Accuracy");
        assert_eq!(display_label("lr"), "Lr");
        assert_eq!(display_label("top5_acc"), "Top5Acc");
        assert_eq!(display_label("AUC"), "Auc");
    }
}
