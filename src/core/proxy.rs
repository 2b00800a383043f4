use crate::core::invocation::{Call, Method};
use crate::domain::ports::{Console, Person};
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

pub const OBSERVATION_PREFIX: &str = "[Proxy Interception] Method called: ";

/// Wraps a [`Person`] and records every call before forwarding it.
///
/// The proxy owns its target. Each call writes exactly one observation line
/// to the console and then forwards to the target exactly once, returning the
/// target's result untouched.
pub struct PersonProxy<P: Person> {
    target: P,
    console: Arc<dyn Console>,
}

impl<P: Person> PersonProxy<P> {
    pub fn new(target: P, console: Arc<dyn Console>) -> Self {
        Self { target, console }
    }

    pub fn target(&self) -> &P {
        &self.target
    }

    pub fn into_inner(self) -> P {
        self.target
    }

    /// Invoke an operation by its identifier with JSON arguments.
    ///
    /// Unknown operations and malformed arguments fail before anything is
    /// observed or forwarded.
    pub fn invoke(&self, operation: &str, args: &[Value]) -> Result<()> {
        let call = Call::parse(operation, args).inspect_err(|e| {
            tracing::warn!(operation, error = %e, "rejected call");
        })?;
        call.apply(self)
    }

    fn observe(&self, method: Method) -> Result<()> {
        tracing::debug!(method = %method, "intercepted call");
        self.console
            .write_line(&format!("{}{}", OBSERVATION_PREFIX, method))
    }
}

impl<P: Person> Person for PersonProxy<P> {
    fn introduce(&self, name: &str) -> Result<()> {
        self.observe(Method::Introduce)?;
        self.target.introduce(name)
    }

    fn say_age(&self, age: u32) -> Result<()> {
        self.observe(Method::SayAge)?;
        self.target.say_age(age)
    }

    fn say_where_from(&self, city: &str, country: &str) -> Result<()> {
        self.observe(Method::SayWhereFrom)?;
        self.target.say_where_from(city, country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;
    use crate::utils::error::ProxyError;
    use std::sync::Mutex;

    /// Records forwarded calls and fails `say_age` on demand.
    #[derive(Default)]
    struct RecordingPerson {
        calls: Mutex<Vec<String>>,
        fail_age: bool,
    }

    impl RecordingPerson {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Person for RecordingPerson {
        fn introduce(&self, name: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("introduce({})", name));
            Ok(())
        }

        fn say_age(&self, age: u32) -> Result<()> {
            self.calls.lock().unwrap().push(format!("sayAge({})", age));
            if self.fail_age {
                return Err(ProxyError::Io(std::io::Error::other("broken pipe")));
            }
            Ok(())
        }

        fn say_where_from(&self, city: &str, country: &str) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("sayWhereFrom({}, {})", city, country));
            Ok(())
        }
    }

    #[test]
    fn test_forwards_each_call_once() {
        let console = Arc::new(MemoryConsole::new());
        let proxy = PersonProxy::new(RecordingPerson::default(), console.clone());

        proxy.introduce("Mohan").unwrap();
        proxy.say_age(30).unwrap();
        proxy.say_where_from("Delhi", "India").unwrap();

        assert_eq!(
            proxy.target().calls(),
            vec!["introduce(Mohan)", "sayAge(30)", "sayWhereFrom(Delhi, India)"]
        );
        assert_eq!(
            console.lines(),
            vec![
                "[Proxy Interception] Method called: introduce",
                "[Proxy Interception] Method called: sayAge",
                "[Proxy Interception] Method called: sayWhereFrom",
            ]
        );
    }

    #[test]
    fn test_target_failure_propagates_unchanged() {
        let console = Arc::new(MemoryConsole::new());
        let target = RecordingPerson {
            fail_age: true,
            ..Default::default()
        };
        let proxy = PersonProxy::new(target, console.clone());

        let err = proxy.say_age(30).unwrap_err();
        match err {
            ProxyError::Io(io) => assert_eq!(io.to_string(), "broken pipe"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(proxy.target().calls(), vec!["sayAge(30)"]);
        assert_eq!(console.lines().len(), 1);
    }

    #[test]
    fn test_invoke_rejects_without_observing() {
        let console = Arc::new(MemoryConsole::new());
        let proxy = PersonProxy::new(RecordingPerson::default(), console.clone());

        let err = proxy.invoke("sayGoodbye", &[]).unwrap_err();
        assert!(matches!(err, ProxyError::UnsupportedOperation { .. }));

        let err = proxy.invoke("sayAge", &[Value::from("old")]).unwrap_err();
        assert!(matches!(err, ProxyError::InvalidArguments { .. }));

        assert!(console.lines().is_empty());
        assert!(proxy.into_inner().calls().is_empty());
    }

    #[test]
    fn test_invoke_forwards_through_typed_path() {
        let console = Arc::new(MemoryConsole::new());
        let proxy = PersonProxy::new(RecordingPerson::default(), console.clone());

        proxy
            .invoke("sayWhereFrom", &[Value::from("Delhi"), Value::from("India")])
            .unwrap();

        assert_eq!(proxy.target().calls(), vec!["sayWhereFrom(Delhi, India)"]);
        assert_eq!(
            console.lines(),
            vec!["[Proxy Interception] Method called: sayWhereFrom"]
        );
    }
}
