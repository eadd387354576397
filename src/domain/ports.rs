use crate::domain::model::OverflowPolicy;

/// A source of settings. `None` means "not set here", so the next
/// provider in line gets a say.
pub trait ConfigProvider {
    fn overflow_policy(&self) -> Option<OverflowPolicy>;
    fn log_level(&self) -> Option<&str>;
    fn log_json(&self) -> bool;
}

/// First provider that sets a policy wins; falls back to wrapping.
pub fn resolve_overflow_policy(providers: &[&dyn ConfigProvider]) -> OverflowPolicy {
    providers
        .iter()
        .find_map(|&p| p.overflow_policy())
        .unwrap_or_default()
}

pub fn resolve_log_level<'a>(providers: &[&'a dyn ConfigProvider]) -> Option<&'a str> {
    providers.iter().find_map(|&p| p.log_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<OverflowPolicy>, Option<&'static str>);

    impl ConfigProvider for Fixed {
        fn overflow_policy(&self) -> Option<OverflowPolicy> {
            self.0
        }

        fn log_level(&self) -> Option<&str> {
            self.1
        }

        fn log_json(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_first_provider_wins() {
        let cli = Fixed(None, Some("debug"));
        let file = Fixed(Some(OverflowPolicy::Checked), Some("warn"));
        let providers: [&dyn ConfigProvider; 2] = [&cli, &file];
        assert_eq!(resolve_overflow_policy(&providers), OverflowPolicy::Checked);
        assert_eq!(resolve_log_level(&providers), Some("debug"));
    }

    #[test]
    fn test_defaults_to_wrapping() {
        assert_eq!(resolve_overflow_policy(&[]), OverflowPolicy::Wrapping);
        assert_eq!(resolve_log_level(&[]), None);
    }
}
