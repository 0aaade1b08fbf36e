//! npm/yarn publish and pack commands

use std::sync::Arc;

use tracing::instrument;

use flotilla_core::{
    DiagnosticEvent, DiagnosticSink, NpmClient, Package, Result, TracingSink,
};

use crate::exec::{ExecOptions, ExecOutput, ProcessExecutor};

/// Options steering publish command construction
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Package-manager client to publish through
    pub client: NpmClient,

    /// Registry override; absent means the client default
    pub registry: Option<String>,

    /// One-time password for registries requiring 2FA
    pub otp: Option<String>,
}

/// Builds and runs the package-manager commands for a release.
///
/// Package-manager CLIs are strict about flag order and presence, so the
/// argument lists here are constructed exactly and never reordered.
pub struct NpmPublisher {
    executor: Arc<dyn ProcessExecutor>,
    sink: Arc<dyn DiagnosticSink>,
}

impl NpmPublisher {
    /// Create a publisher around a process executor
    pub fn new(executor: Arc<dyn ProcessExecutor>) -> Self {
        Self {
            executor,
            sink: Arc::new(TracingSink),
        }
    }

    /// Use a custom diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Publish the package tarball.
    ///
    /// A dist-tag is trimmed and appended as `--tag <value>` only when
    /// non-empty; a whitespace-only tag means "no tag" and the client
    /// default applies. The yarn client always gets
    /// `--new-version <version> --non-interactive` after any tag, reusing
    /// the version decided upstream instead of letting yarn prompt for one.
    #[instrument(skip(self, options), fields(package = %package.name, client = %options.client))]
    pub async fn publish(
        &self,
        package: &Package,
        dist_tag: Option<&str>,
        options: &PublishOptions,
    ) -> Result<ExecOutput> {
        let mut args = vec!["publish".to_string(), package.tarball_name()];

        let dist_tag = dist_tag.map(str::trim).filter(|tag| !tag.is_empty());
        if let Some(tag) = dist_tag {
            args.push("--tag".to_string());
            args.push(tag.to_string());
        }

        if options.client == NpmClient::Yarn {
            args.push("--new-version".to_string());
            args.push(package.version.clone());
            args.push("--non-interactive".to_string());
        }

        let exec_options = exec_options(package, options.registry.as_deref(), options.otp.as_deref());

        self.sink.emit(&DiagnosticEvent::PublishStarted {
            package: package.name.clone(),
            command: format!("{} {}", options.client, args.join(" ")),
        });

        let output = self
            .executor
            .execute(options.client.as_str(), &args, &exec_options)
            .await?;

        self.sink.emit(&DiagnosticEvent::PublishCompleted {
            package: package.name.clone(),
        });

        Ok(output)
    }

    /// Pack the package tarball without publishing. Packing always goes
    /// through npm, even when publishes use the yarn client.
    #[instrument(skip(self), fields(package = %package.name))]
    pub async fn pack(&self, package: &Package) -> Result<ExecOutput> {
        let args = vec!["pack".to_string()];
        let exec_options = exec_options(package, None, None);

        self.sink.emit(&DiagnosticEvent::PublishStarted {
            package: package.name.clone(),
            command: "npm pack".to_string(),
        });

        let output = self.executor.execute("npm", &args, &exec_options).await?;

        self.sink.emit(&DiagnosticEvent::PublishCompleted {
            package: package.name.clone(),
        });

        Ok(output)
    }
}

fn exec_options(package: &Package, registry: Option<&str>, otp: Option<&str>) -> ExecOptions {
    let mut options = ExecOptions::new(package.location.clone(), package.name.clone());

    if let Some(otp) = otp {
        options
            .env
            .insert("npm_config_otp".to_string(), otp.to_string());
    }

    if let Some(registry) = registry {
        options
            .env
            .insert("npm_config_registry".to_string(), registry.to_string());
    }

    options
}
