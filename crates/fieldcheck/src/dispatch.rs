//! Validation dispatch
//!
//! Walks the selected fields of a record in declaration order, parses each
//! field's rule chain and runs the resolved rules in chain order. The first
//! error of any kind ends the whole run; nothing is aggregated.
//!
//! Token resolution:
//!
//! 1. the whole token names a registered rule → run it with an empty argument;
//! 2. the token is `name=value` and `name` is registered → run it with `value`;
//! 3. otherwise → [`CheckError::UnresolvedRule`].

use std::sync::Arc;

use tracing::{debug, error};

use crate::foundation::{CheckError, CheckResult, Field, Rule};
use crate::grammar::{RuleChain, RuleToken};
use crate::record::Record;
use crate::registry::{self, RuleRegistry};
use crate::selector::Selection;

// ============================================================================
// CORE ALGORITHM
// ============================================================================

fn resolve<'r, 't>(
    registry: &'r RuleRegistry,
    token: RuleToken<'t>,
) -> Option<(&'r dyn Rule, &'t str)> {
    if let Some(rule) = registry.resolve(token.raw()) {
        return Some((rule, ""));
    }
    match token {
        RuleToken::Keyed { name, value, .. } => registry.resolve(name).map(|rule| (rule, value)),
        RuleToken::Bare(_) => None,
    }
}

/// Runs the rule chain `chain` against one field.
pub fn validate_field_with(registry: &RuleRegistry, chain: &str, field: &Field<'_>) -> CheckResult {
    let chain = RuleChain::parse(chain);
    for token in chain.tokens() {
        let Some((rule, arg)) = resolve(registry, token) else {
            error!(token = token.raw(), field = field.name(), "unresolved rule");
            return Err(CheckError::UnresolvedRule {
                token: token.raw().to_owned(),
                field: field.name().to_owned(),
            });
        };
        debug!(rule = token.name(), arg, field = field.name(), "running rule");
        rule.check(field, arg)?;
    }
    Ok(())
}

/// Validates the fields of `record` picked by `selection`.
pub fn validate_record_with<R>(
    registry: &RuleRegistry,
    record: &R,
    selection: &Selection,
) -> CheckResult
where
    R: Record + ?Sized,
{
    for field in selection.apply(record.fields()?) {
        validate_field_with(registry, field.rules(), &field.descriptor())?;
    }
    Ok(())
}

// ============================================================================
// CHECKER
// ============================================================================

/// A validation engine bound to an immutable registry.
///
/// Cheap to clone and safe to share between threads.
///
/// ```
/// use fieldcheck::dispatch::Checker;
/// use fieldcheck::record::FieldMap;
///
/// let checker = Checker::default();
/// let record = FieldMap::new()
///     .annotated("UserName", "", "nonil")
///     .annotated("Email", "a@b.com", "email");
///
/// let err = checker.validate_all(&record).unwrap_err();
/// assert_eq!(err.to_string(), "field `User Name` cannot be empty");
/// assert!(checker.validate_except(&record, ["UserName"]).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Checker {
    registry: Arc<RuleRegistry>,
}

impl Checker {
    /// Wraps a sealed registry.
    #[must_use]
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// The rules this checker resolves against.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validates every annotated field.
    pub fn validate_all<R: Record + ?Sized>(&self, record: &R) -> CheckResult {
        self.validate(record, &Selection::all())
    }

    /// Validates every annotated field not listed in `excluded`.
    pub fn validate_except<R, I, S>(&self, record: &R, excluded: I) -> CheckResult
    where
        R: Record + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validate(record, &Selection::omit(excluded))
    }

    /// Validates only the fields listed in `included`.
    pub fn validate_only<R, I, S>(&self, record: &R, included: I) -> CheckResult
    where
        R: Record + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validate(record, &Selection::only(included))
    }

    /// Validates the fields picked by `selection`.
    pub fn validate<R: Record + ?Sized>(&self, record: &R, selection: &Selection) -> CheckResult {
        validate_record_with(&self.registry, record, selection)
    }

    /// Runs one rule chain against one field.
    pub fn validate_field(&self, chain: &str, field: &Field<'_>) -> CheckResult {
        validate_field_with(&self.registry, chain, field)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Arc::new(RuleRegistry::with_builtins()))
    }
}

// ============================================================================
// PROCESS-WIDE ENTRY POINTS
// ============================================================================

/// Validates every annotated field against the process-wide registry.
pub fn validate_all<R: Record + ?Sized>(record: &R) -> CheckResult {
    validate(record, &Selection::all())
}

/// Validates every annotated field not listed in `excluded`.
pub fn validate_except<R, I, S>(record: &R, excluded: I) -> CheckResult
where
    R: Record + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    validate(record, &Selection::omit(excluded))
}

/// Validates only the fields listed in `included`.
pub fn validate_only<R, I, S>(record: &R, included: I) -> CheckResult
where
    R: Record + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    validate(record, &Selection::only(included))
}

/// Validates the fields picked by `selection` against the process-wide registry.
pub fn validate<R: Record + ?Sized>(record: &R, selection: &Selection) -> CheckResult {
    validate_record_with(&registry::global(), record, selection)
}

/// Runs one rule chain against one field using the process-wide registry.
///
/// ```
/// use fieldcheck::{validate_field, foundation::Field};
///
/// let field = Field::from_ident("ZipCode", "1234");
/// assert!(validate_field("nonil num len=4", &field).is_ok());
/// assert!(validate_field("len=5", &field).is_err());
/// ```
pub fn validate_field(chain: &str, field: &Field<'_>) -> CheckResult {
    validate_field_with(&registry::global(), chain, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, ValidationError, rule_fn};
    use crate::record::FieldMap;
    use crate::registry::RegistryBuilder;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every rule invocation as `name:field:arg`.
    fn recording_checker(log: &'static Mutex<Vec<String>>) -> Checker {
        let record = move |name: &'static str, pass: bool| {
            rule_fn(move |field: &Field<'_>, arg: &str| {
                log.lock()
                    .unwrap()
                    .push(format!("{name}:{}:{arg}", field.name()));
                if pass {
                    Ok(())
                } else {
                    Err(ValidationError::new(name, format!("{name} failed")).into())
                }
            })
        };
        RegistryBuilder::new()
            .rule("ok", record("ok", true))
            .rule("bad", record("bad", false))
            .rule("arg", record("arg", true))
            .build()
    }

    #[test]
    fn empty_chain_passes() {
        let checker = Checker::default();
        assert!(checker.validate_field("", &Field::new("X", "")).is_ok());
        assert!(checker.validate_field("   ", &Field::new("X", "")).is_ok());
    }

    #[test]
    fn bare_and_keyed_tokens_receive_arguments() {
        static LOG: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let checker = recording_checker(&LOG);
        checker
            .validate_field("ok  arg=a=b", &Field::new("F", ""))
            .unwrap();
        assert_eq!(*LOG.lock().unwrap(), ["ok:F:", "arg:F:a=b"]);
    }

    #[test]
    fn short_circuits_within_chain() {
        static LOG: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let checker = recording_checker(&LOG);
        let err = checker
            .validate_field("ok bad ok", &Field::new("F", ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "bad failed");
        assert_eq!(*LOG.lock().unwrap(), ["ok:F:", "bad:F:"]);
    }

    #[test]
    fn short_circuits_across_fields() {
        static LOG: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let checker = recording_checker(&LOG);
        let record = FieldMap::new()
            .annotated("First", "", "ok")
            .annotated("Second", "", "bad")
            .annotated("Third", "", "ok");
        assert!(checker.validate_all(&record).is_err());
        assert_eq!(*LOG.lock().unwrap(), ["ok:First:", "bad:Second:"]);
    }

    #[test]
    fn unresolved_token_names_token_and_field() {
        let checker = Checker::default();
        let err = checker
            .validate_field("nonil bogus", &Field::from_ident("UserName", "bob"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err,
            CheckError::UnresolvedRule {
                token: "bogus".into(),
                field: "User Name".into(),
            }
        );
    }

    #[test]
    fn keyed_token_with_unknown_name_is_unresolved() {
        let err = Checker::default()
            .validate_field("size=3", &Field::new("F", "abc"))
            .unwrap_err();
        assert!(matches!(err, CheckError::UnresolvedRule { ref token, .. } if token == "size=3"));
    }

    #[test]
    fn bare_registration_wins_over_keyed_split() {
        static LOG: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let checker = RegistryBuilder::new()
            .rule(
                "mode=strict",
                rule_fn(|_field, arg| {
                    LOG.lock().unwrap().push(format!("bare:{arg}"));
                    Ok(())
                }),
            )
            .rule(
                "mode",
                rule_fn(|_field, arg| {
                    LOG.lock().unwrap().push(format!("keyed:{arg}"));
                    Ok(())
                }),
            )
            .build();
        checker
            .validate_field("mode=strict mode=loose", &Field::new("F", ""))
            .unwrap();
        assert_eq!(*LOG.lock().unwrap(), ["bare:", "keyed:loose"]);
    }

    #[test]
    fn length_rule_without_argument_is_configuration_error() {
        let err = Checker::default()
            .validate_field("len", &Field::new("F", "abc"))
            .unwrap_err();
        // `len` resolves as a bare name and receives an empty argument.
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(matches!(err, CheckError::InvalidArgument { .. }));
    }

    #[test]
    fn invalid_input_short_circuits() {
        let record: Option<FieldMap> = None;
        let err = Checker::default().validate_all(&record).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn only_mode_field_without_rules_passes() {
        let record = FieldMap::new().field("Note", "").annotated("Name", "", "nonil");
        assert!(Checker::default().validate_only(&record, ["Note"]).is_ok());
        assert!(Checker::default().validate_only(&record, ["Name"]).is_err());
    }

    #[test]
    fn whitespace_only_chain_is_unannotated() {
        let record = FieldMap::new().annotated("Note", "", "   ");
        let checker = Checker::default();
        assert!(checker.validate_all(&record).is_ok());
        assert!(checker.validate_only(&record, ["Note"]).is_ok());
    }

    #[test]
    fn checker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Checker>();
        assert_send_sync::<RuleRegistry>();
    }

    #[test]
    fn shared_checker_validates_in_parallel() {
        let checker = Checker::default();
        let records: Vec<FieldMap> = (0..8)
            .map(|i| {
                let value = if i % 2 == 0 { i.to_string() } else { format!("x{i}") };
                FieldMap::new().annotated("Count", value, "nonil num")
            })
            .collect();

        let outcomes: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = records
                .iter()
                .map(|record| {
                    let checker = &checker;
                    scope.spawn(move || checker.validate_all(record).is_ok())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(outcomes, [true, false, true, false, true, false, true, false]);
    }
}
