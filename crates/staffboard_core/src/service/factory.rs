//! Employee creation from the form buffer.

use crate::controller::form::{FormError, FormField, FormState};
use crate::model::employee::Employee;

/// Builds one employee from the current form buffer.
///
/// Copies every field as entered; no identifier is stamped and the buffer is
/// not reset. Fails with `NotANumber` when `age` or `experience` does not
/// hold a number.
pub fn create_account(form: &FormState) -> Result<Employee, FormError> {
    let age = form.age.ok_or(FormError::NotANumber(FormField::Age))?;
    let experience = form
        .experience
        .ok_or(FormError::NotANumber(FormField::Experience))?;

    Ok(Employee {
        name: form.name.clone(),
        age,
        position: form.position.clone(),
        experience,
        discipline: form.discipline,
    })
}
