//! # Audit Session
//!
//! The explicit session value that owns the pipeline state: engine,
//! state machine, and the current scan result. A caller threads the
//! session (and its driver handle) through each operation; there is no
//! hidden global state. Sessions are single-threaded and synchronous —
//! the surrounding test runner guarantees sequential calls.
//!
//! State machine: `Idle → Injected → Executed`. `inject` moves
//! Idle→Injected and is idempotent afterwards; `run` requires at least
//! Injected and (re-)enters Executed, replacing the current result;
//! summarize/render/gate/json require Executed.

use std::io;
use std::path::Path;

use crate::api::errors::AuditError;
use crate::engine::{AccessibilityEngine, AxeEngine, PageDriver, ScanContext, ScanOptions};
use crate::report::{self, ReportTable};
use crate::store::ResultStore;
use crate::types::{RuleCategory, ScanResult, Summary};

/// Default category for the issues log keyword
pub const DEFAULT_ISSUES_CATEGORY: &str = "violations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Injected,
    Executed,
}

/// One scan session: engine + state + current result
pub struct AuditSession<E: AccessibilityEngine = AxeEngine> {
    engine: E,
    state: SessionState,
    store: ResultStore,
}

impl AuditSession<AxeEngine> {
    /// Session backed by the bundled axe engine
    pub fn new() -> Self {
        Self::with_engine(AxeEngine::new())
    }
}

impl Default for AuditSession<AxeEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AccessibilityEngine> AuditSession<E> {
    /// Session backed by a custom engine implementation
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            state: SessionState::Idle,
            store: ResultStore::new(),
        }
    }

    /// Ensure the engine script is runnable in the current page.
    /// Safe to call repeatedly.
    pub fn inject(
        &mut self,
        driver: &mut dyn PageDriver,
        script_path: Option<&Path>,
    ) -> Result<(), AuditError> {
        self.engine.inject(driver, script_path)?;
        if self.state == SessionState::Idle {
            self.state = SessionState::Injected;
        }
        Ok(())
    }

    /// Scan the page, replacing the session's current result
    pub fn run(
        &mut self,
        driver: &mut dyn PageDriver,
        context: Option<&ScanContext>,
        options: Option<&ScanOptions>,
    ) -> Result<&ScanResult, AuditError> {
        if self.state == SessionState::Idle {
            return Err(AuditError::NotInjected);
        }
        let result = self.engine.run(driver, context, options)?;
        self.state = SessionState::Executed;
        Ok(self.store.replace(result))
    }

    /// The session's current result; fails until `run` has succeeded
    pub fn current(&self) -> Result<&ScanResult, AuditError> {
        Ok(self.store.current()?)
    }

    /// Category counts of the current result
    pub fn summarize(&self) -> Result<Summary, AuditError> {
        Ok(Summary::of(self.current()?))
    }

    /// Issue report rows for one category of the current result
    pub fn render(&self, category: RuleCategory) -> Result<ReportTable, AuditError> {
        Ok(ReportTable::render(self.current()?, category))
    }

    /// Violation gate: fails with `ViolationsFound` iff the current
    /// result's violations category is non-empty
    pub fn check_violations(&self) -> Result<(), AuditError> {
        let count = self.current()?.violations.len();
        if count > 0 {
            Err(AuditError::ViolationsFound { count })
        } else {
            Ok(())
        }
    }

    /// Keyword surface: inject + run + persist + summarize
    pub fn run_accessibility_tests(
        &mut self,
        driver: &mut dyn PageDriver,
        result_file: &Path,
        script_path: Option<&Path>,
        context: Option<&ScanContext>,
        options: Option<&ScanOptions>,
    ) -> Result<Summary, AuditError> {
        self.inject(driver, script_path)?;
        self.run(driver, context, options)?;
        self.store.persist(result_file)?;
        let summary = self.summarize()?;
        log::info!("accessibility scan summary: {summary}");
        Ok(summary)
    }

    /// Keyword surface: pretty-printed JSON of the current result
    pub fn json_result(&self) -> Result<String, AuditError> {
        let json = self
            .current()?
            .to_json()
            .map_err(crate::store::StoreError::Serialize)?;
        Ok(json)
    }

    /// Keyword surface: render the issue table for `category_name` to the
    /// report sink, then invoke the violation gate. The table is emitted
    /// before `ViolationsFound` surfaces so the failure is actionable
    /// without re-running the scan.
    pub fn issues_log<W: io::Write>(
        &self,
        category_name: &str,
        sink: &mut W,
    ) -> Result<(), AuditError> {
        let category: RuleCategory = category_name.parse()?;
        let table = self.render(category)?;
        let html = report::render_html(&table);
        sink.write_all(html.as_bytes())
            .map_err(AuditError::ReportWrite)?;
        self.check_violations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::{ExecutionError, InjectionError};
    use crate::engine::DriverProvider;
    use crate::store::StoreError;
    use assert_matches::assert_matches;
    use serde_json::Value;

    /// Engine fake that replays canned results without touching a page
    struct FakeEngine {
        result: Value,
        fail_injection: bool,
    }

    impl FakeEngine {
        fn returning(result: Value) -> Self {
            Self {
                result,
                fail_injection: false,
            }
        }
    }

    impl AccessibilityEngine for FakeEngine {
        fn inject(
            &self,
            _driver: &mut dyn PageDriver,
            _script_path: Option<&Path>,
        ) -> Result<(), InjectionError> {
            if self.fail_injection {
                return Err(InjectionError::ScriptEval {
                    reason: "axe.run is not defined".to_string(),
                });
            }
            Ok(())
        }

        fn run(
            &self,
            _driver: &mut dyn PageDriver,
            _context: Option<&ScanContext>,
            _options: Option<&ScanOptions>,
        ) -> Result<ScanResult, ExecutionError> {
            Ok(serde_json::from_value(self.result.clone())?)
        }
    }

    /// Driver stub; the fake engine never actually evaluates scripts
    struct StubDriver;

    impl PageDriver for StubDriver {
        fn execute_script(
            &mut self,
            _script: &str,
        ) -> Result<Value, crate::engine::error::DriverError> {
            Ok(Value::Null)
        }

        fn execute_async_script(
            &mut self,
            _script: &str,
        ) -> Result<Value, crate::engine::error::DriverError> {
            Ok(Value::Null)
        }
    }

    /// Provider handing out the stub, as a host framework would
    struct StubProvider {
        driver: StubDriver,
    }

    impl DriverProvider for StubProvider {
        type Driver = StubDriver;

        fn active_driver(
            &mut self,
        ) -> Result<&mut StubDriver, crate::engine::error::DriverError> {
            Ok(&mut self.driver)
        }
    }

    fn clean_page() -> Value {
        serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [], "violations": []
        })
    }

    fn page_with_violation() -> Value {
        serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [],
            "violations": [{
                "id": "color-contrast",
                "help": "Contrast",
                "nodes": [{"target": ["#a"], "html": "<div>"}]
            }]
        })
    }

    #[test]
    fn run_before_inject_fails() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(clean_page()));
        let err = session.run(&mut StubDriver, None, None).unwrap_err();
        assert_matches!(err, AuditError::NotInjected);
    }

    #[test]
    fn reads_before_run_fail_with_no_result() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(clean_page()));
        assert_matches!(
            session.summarize().unwrap_err(),
            AuditError::Store(StoreError::NoResult)
        );
        assert_matches!(
            session.render(RuleCategory::Violations).unwrap_err(),
            AuditError::Store(StoreError::NoResult)
        );
        assert_matches!(
            session.check_violations().unwrap_err(),
            AuditError::Store(StoreError::NoResult)
        );
        assert_matches!(
            session.json_result().unwrap_err(),
            AuditError::Store(StoreError::NoResult)
        );

        // Still not enough after inject alone.
        session.inject(&mut StubDriver, None).unwrap();
        assert_matches!(
            session.summarize().unwrap_err(),
            AuditError::Store(StoreError::NoResult)
        );
    }

    #[test]
    fn inject_is_idempotent() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(clean_page()));
        session.inject(&mut StubDriver, None).unwrap();
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        // Injecting again after a run keeps the result available.
        session.inject(&mut StubDriver, None).unwrap();
        assert!(session.current().is_ok());
    }

    #[test]
    fn injection_failure_keeps_session_idle() {
        let mut engine = FakeEngine::returning(clean_page());
        engine.fail_injection = true;
        let mut session = AuditSession::with_engine(engine);
        assert_matches!(
            session.inject(&mut StubDriver, None).unwrap_err(),
            AuditError::Injection(_)
        );
        assert_matches!(
            session.run(&mut StubDriver, None, None).unwrap_err(),
            AuditError::NotInjected
        );
    }

    #[test]
    fn rerun_replaces_the_current_result() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(page_with_violation()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        assert_eq!(session.summarize().unwrap().violations, 1);

        let mut session = AuditSession::with_engine(FakeEngine::returning(clean_page()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        assert_eq!(session.summarize().unwrap().violations, 0);
    }

    #[test]
    fn current_is_stable_between_reads() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(page_with_violation()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        let first = session.current().unwrap().clone();
        assert_eq!(&first, session.current().unwrap());
    }

    #[test]
    fn gate_fails_iff_violations_present() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(page_with_violation()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        assert_matches!(
            session.check_violations().unwrap_err(),
            AuditError::ViolationsFound { count: 1 }
        );

        let mut session = AuditSession::with_engine(FakeEngine::returning(clean_page()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        session.check_violations().unwrap();
    }

    #[test]
    fn run_accessibility_tests_persists_and_summarizes() {
        let dir = tempfile::tempdir().unwrap();
        let result_file = dir.path().join("results.json");

        let mut provider = StubProvider { driver: StubDriver };
        let mut session = AuditSession::with_engine(FakeEngine::returning(page_with_violation()));
        let summary = session
            .run_accessibility_tests(
                provider.active_driver().unwrap(),
                &result_file,
                None,
                None,
                None,
            )
            .unwrap();

        assert_eq!(summary.violations, 1);
        assert_eq!(summary.passes, 0);

        let reloaded = ScanResult::from_json_file(&result_file).unwrap();
        assert_eq!(Summary::of(&reloaded), summary);
    }

    #[test]
    fn json_result_is_pretty_printed() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(clean_page()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();
        let json = session.json_result().unwrap();
        assert!(json.contains('\n'));
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value["violations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn issues_log_emits_table_then_gates() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(page_with_violation()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();

        let mut sink = Vec::new();
        let err = session
            .issues_log(DEFAULT_ISSUES_CATEGORY, &mut sink)
            .unwrap_err();
        assert_matches!(err, AuditError::ViolationsFound { count: 1 });

        // The table was written before the gate fired.
        let html = String::from_utf8(sink).unwrap();
        assert!(html.contains("#a"));
        assert!(html.contains("Contrast"));
    }

    #[test]
    fn issues_log_passes_on_clean_page() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(clean_page()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();

        let mut sink = Vec::new();
        session.issues_log("incomplete", &mut sink).unwrap();
        assert!(String::from_utf8(sink).unwrap().contains("LOCATOR"));
    }

    #[test]
    fn issues_log_rejects_unknown_category_without_output() {
        let mut session = AuditSession::with_engine(FakeEngine::returning(page_with_violation()));
        session.inject(&mut StubDriver, None).unwrap();
        session.run(&mut StubDriver, None, None).unwrap();

        let mut sink = Vec::new();
        let err = session.issues_log("unknown", &mut sink).unwrap_err();
        assert_matches!(err, AuditError::UnsupportedCategory(_));
        assert!(sink.is_empty());
    }
}
