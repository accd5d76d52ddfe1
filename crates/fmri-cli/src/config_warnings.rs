use fmri_config::ENV_PREFIX;

const SECTIONS: [&str; 3] = ["LAYOUT", "RULES", "COHORTS"];

/// Emit warnings for `FMRI_CHECK_*` env keys that figment will silently ignore.
pub fn warn_mistyped_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();

    for (key, _) in env {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        // Log filter, read by the tracing subscriber.
        if rest == "LOG" {
            continue;
        }

        match SECTIONS.iter().find(|section| rest.starts_with(**section)) {
            Some(section) if rest[section.len()..].starts_with("__") => {}
            Some(section) => warnings.push(format!(
                "{key} is ignored. Use double underscores between section and field (example: {ENV_PREFIX}{section}__FIELD)."
            )),
            None => warnings.push(format!(
                "{key} is ignored: unknown section (expected one of {}).",
                SECTIONS.join(", ")
            )),
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::collect_env_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_and_unknown_sections() {
        let warnings = collect_env_warnings(env(&[
            "FMRI_CHECK_RULES_REQUIRED_KEY",
            "FMRI_CHECK_OUTPUT__FORMAT",
        ]));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("FMRI_CHECK_RULES__FIELD"));
        assert!(warnings[1].contains("unknown section"));
    }

    #[test]
    fn does_not_warn_for_valid_or_foreign_keys() {
        let warnings = collect_env_warnings(env(&[
            "FMRI_CHECK_RULES__REQUIRED_KEY",
            "FMRI_CHECK_LAYOUT__FUNC_DIR",
            "FMRI_CHECK_COHORTS__SUFFIX",
            "FMRI_CHECK_LOG",
            "HOME",
            "RUST_LOG",
        ]));

        assert!(warnings.is_empty());
    }
}
