#[cfg(test)]
mod tests {
    use crate::config::settings::Settings;

    #[test]
    fn test_config_loading_with_defaults() {
        let settings = Settings::new().expect("default configuration should load");

        assert!(!settings.server.host.is_empty());
        assert!(!settings.database.url.is_empty());
        assert!(!settings.jwt.secret.is_empty());
        assert_eq!(settings.jwt.refresh_token_ttl_secs, 7 * 24 * 60 * 60);
        assert!(settings.pagination.default_page_size <= settings.pagination.max_page_size);
        assert!(settings.password.iterations >= 1);
    }
}
