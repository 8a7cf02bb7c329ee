// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试配置加载和凭据覆盖

#[cfg(test)]
mod tests {
    use config::Map;
    use foxseek::config::settings::Settings;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_loading_from_default_toml() {
        let settings = Settings::new().expect("configuration should load");

        assert!(!settings.server.host.is_empty());
        assert_eq!(settings.ai_search.function_name, "web_search");
        assert_eq!(settings.ai_search.result_count, 10);
        assert!(settings
            .google_search
            .endpoint
            .starts_with("https://www.googleapis.com/"));
        assert!(settings.duckduckgo.endpoint.contains("duckduckgo"));
    }

    #[test]
    fn test_legacy_credential_variables_override() {
        let settings = Settings::from_vars(vars(&[
            ("GOOGLE_SEARCH_API_KEY", "legacy-key-value"),
            ("GOOGLE_SEARCH_ENGINE_ID", "legacy-cx"),
        ]))
        .expect("configuration should load");

        assert_eq!(
            settings.google_search.credentials(),
            Some(("legacy-key-value", "legacy-cx"))
        );
    }

    #[test]
    fn test_legacy_variables_take_precedence_over_prefixed() {
        let settings = Settings::from_vars(vars(&[
            ("FOXSEEK__GOOGLE_SEARCH__API_KEY", "prefixed-key"),
            ("FOXSEEK__GOOGLE_SEARCH__SEARCH_ENGINE_ID", "prefixed-cx"),
            ("GOOGLE_SEARCH_API_KEY", "legacy-key"),
        ]))
        .expect("configuration should load");

        assert_eq!(
            settings.google_search.credentials(),
            Some(("legacy-key", "prefixed-cx"))
        );
    }

    #[test]
    fn test_missing_credentials_yield_none() {
        let settings = Settings::from_vars(Map::new()).expect("configuration should load");
        assert!(settings.google_search.credentials().is_none());
    }
}
