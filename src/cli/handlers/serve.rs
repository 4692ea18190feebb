//! `serve` command: run the admin endpoints, or just check what would run

use std::io::{self, Write};

use crate::auth::SUPERUSER;
use crate::config::settings::Settings;
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Starts the server, or with `dry_run` prints the effective setup and returns.
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            return self.report(&mut io::stdout().lock());
        }

        Server::new(self.config).run().await
    }

    /// Writes a summary of the checked configuration to `out`.
    fn report(&self, out: &mut impl Write) -> anyhow::Result<()> {
        self.config.validate()?;

        let server = &self.config.server;
        writeln!(out, "✓ Configuration is valid")?;
        writeln!(out, "✓ Admin endpoints on http://{}", server.address())?;
        writeln!(out, "    POST /useradd/{{username}}")?;
        writeln!(out, "    GET  /userdel/{{username}}")?;
        writeln!(
            out,
            "✓ Superuser '{}' seeded with {} password",
            SUPERUSER,
            if self.config.auth.uses_default_password() {
                "the default"
            } else {
                "a configured"
            }
        )?;
        writeln!(out, "✓ Request timeout: {}s", server.request_timeout)?;
        writeln!(out, "✓ Log level: {}", self.config.logger.level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_of(config: Settings) -> anyhow::Result<String> {
        let mut out = Vec::new();
        ServeCommandHandler::new(config).report(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_dry_run_report_never_prints_password() {
        let mut config = Settings::default();
        config.auth.initial_password = "hunter2-but-longer".to_string();

        let report = report_of(config).unwrap();

        assert!(report.contains("127.0.0.1:7474"));
        assert!(report.contains("/userdel/{username}"));
        assert!(report.contains("a configured password"));
        assert!(!report.contains("hunter2"));
    }

    #[test]
    fn test_dry_run_flags_default_password() {
        let report = report_of(Settings::default()).unwrap();
        assert!(report.contains("the default password"));
    }

    #[tokio::test]
    async fn test_dry_run_rejects_invalid_config() {
        let mut config = Settings::default();
        config.server.port = 0;

        assert!(report_of(config.clone()).is_err());
        assert!(ServeCommandHandler::new(config).execute(true).await.is_err());
    }
}
