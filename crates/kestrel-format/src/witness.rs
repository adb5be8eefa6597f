//! Witness output format.

use kestrel_base::{Model, Value};

/// Formats the solver outcome as a witness block.
///
/// On SAT: `SAT\nv <lits> 0\n`, listing every variable as `i` or `-i`.
/// A variable the search left unassigned prints with positive polarity
/// (the default-true convention). On UNSAT (`None`): `UNSAT\n`.
#[must_use]
pub fn render(model: Option<&Model>) -> String {
    let Some(model) = model else {
        return "UNSAT\n".to_string();
    };

    let mut out = String::from("SAT\nv ");
    for var in 1..=model.num_vars() {
        match model.value(var) {
            Value::False => out.push_str(&format!("-{var} ")),
            Value::True | Value::Unassigned => out.push_str(&format!("{var} ")),
        }
    }
    out.push_str("0\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sat_block_lists_every_variable() {
        let model = Model::new(vec![
            Value::Unassigned,
            Value::True,
            Value::False,
            Value::Unassigned,
        ]);
        assert_eq!(render(Some(&model)), "SAT\nv 1 -2 3 0\n");
    }

    #[test]
    fn unsat_block() {
        assert_eq!(render(None), "UNSAT\n");
    }
}
