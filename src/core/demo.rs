use crate::core::proxy::PersonProxy;
use crate::core::subject::Man;
use crate::domain::model::PersonProfile;
use crate::domain::ports::{Console, Person};
use crate::utils::error::Result;
use std::sync::Arc;

pub fn demo_profile() -> PersonProfile {
    PersonProfile::new("Mohan", 30, "Delhi", "India")
}

/// Build the demo subject and wrap it; both write to `console`.
pub fn demo_subject(console: Arc<dyn Console>) -> Result<PersonProxy<Man>> {
    let man = Man::new(demo_profile(), console.clone())?;
    Ok(PersonProxy::new(man, console))
}

pub fn run_demo(person: &dyn Person) -> Result<()> {
    tracing::info!("Running call interception demo");

    person.introduce("Mohan")?;
    person.say_age(30)?;
    person.say_where_from("Delhi", "India")?;

    tracing::info!("Demo finished");
    Ok(())
}
