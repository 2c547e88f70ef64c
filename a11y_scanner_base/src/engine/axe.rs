//! Axe-core engine adapter.
//!
//! Loads the axe script into the current page and drives `axe.run`
//! through the driver's async-script channel. Rule evaluation is
//! entirely the script's business; this adapter only does plumbing and
//! boundary validation.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::engine::error::{ExecutionError, InjectionError};
use crate::engine::options::{ScanContext, ScanOptions};
use crate::engine::traits::{AccessibilityEngine, PageDriver};
use crate::types::ScanResult;

/// Environment variable overriding the bundled default script location
pub const DEFAULT_SCRIPT_ENV: &str = "A11Y_SCANNER_AXE_JS";

/// Fallback script file name, resolved relative to the working directory
const DEFAULT_SCRIPT_FILE: &str = "axe.min.js";

/// Probe evaluated in the page to detect an already-injected engine
const PROBE_SCRIPT: &str =
    "return (typeof axe === 'object' || typeof axe === 'function') \
     && typeof axe.run === 'function';";

/// Axe-core accessibility engine, addressed through a script file
#[derive(Debug, Clone, Default)]
pub struct AxeEngine {
    script_path: Option<PathBuf>,
}

impl AxeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific engine script instead of the bundled default
    pub fn with_script_path(path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: Some(path.into()),
        }
    }

    /// Resolve the script to load: explicit call-site path, then the
    /// engine's configured path, then env override, then the bundled
    /// default file name
    fn resolve_script_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = &self.script_path {
            return path.clone();
        }
        match std::env::var_os(DEFAULT_SCRIPT_ENV) {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_SCRIPT_FILE),
        }
    }

    fn is_injected(driver: &mut dyn PageDriver) -> Result<bool, InjectionError> {
        let value = driver.execute_script(PROBE_SCRIPT)?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Build the async invocation of `axe.run`. The engine signals
    /// internal failures through an `error` key, which a genuine result
    /// never carries at the top level.
    fn build_run_script(
        context: Option<&ScanContext>,
        options: Option<&ScanOptions>,
    ) -> Result<String, ExecutionError> {
        let options_arg = options
            .cloned()
            .unwrap_or_default()
            .to_argument()
            .map_err(|e| ExecutionError::InvalidOptions {
                reason: e.to_string(),
            })?;

        let run_args = match context.and_then(ScanContext::to_argument) {
            Some(context_arg) => format!("{context_arg}, {options_arg}"),
            None => options_arg,
        };

        Ok(format!(
            "var callback = arguments[arguments.length - 1];\n\
             axe.run({run_args})\n\
               .then(function(results) {{ callback(results); }})\n\
               .catch(function(err) {{ callback({{\"error\": String(err && err.message || err)}}); }});"
        ))
    }
}

impl AccessibilityEngine for AxeEngine {
    fn inject(
        &self,
        driver: &mut dyn PageDriver,
        script_path: Option<&Path>,
    ) -> Result<(), InjectionError> {
        if Self::is_injected(driver)? {
            log::debug!("axe engine already present in page, skipping injection");
            return Ok(());
        }

        let path = self.resolve_script_path(script_path);
        let source =
            std::fs::read_to_string(&path).map_err(|source| InjectionError::ScriptLoad {
                path: path.display().to_string(),
                source,
            })?;

        driver.execute_script(&source)?;

        if !Self::is_injected(driver)? {
            return Err(InjectionError::ScriptEval {
                reason: format!(
                    "script '{}' evaluated but axe.run is not defined",
                    path.display()
                ),
            });
        }

        log::debug!("injected axe engine from '{}'", path.display());
        Ok(())
    }

    fn run(
        &self,
        driver: &mut dyn PageDriver,
        context: Option<&ScanContext>,
        options: Option<&ScanOptions>,
    ) -> Result<ScanResult, ExecutionError> {
        let script = Self::build_run_script(context, options)?;
        let value = driver.execute_async_script(&script)?;

        if let Value::Object(map) = &value {
            if let Some(error) = map.get("error").and_then(Value::as_str) {
                return Err(ExecutionError::EngineFailure {
                    reason: error.to_string(),
                });
            }
        }

        Ok(serde_json::from_value(value)?)
    }
}
