use coral_query::{Combinator, Condition};

/// Split an ordered condition list into OR-separated conjunctive groups.
///
/// `and` binds tighter than `or`: every `or`-marked condition closes the
/// group collected before it and opens the next one, with the marked
/// condition as that group's first member. A list with no `or` marker is a
/// single group.
///
/// A marker in the first position would yield an empty leading group; empty
/// slices are dropped here so no empty bool node can reach the compiler.
pub fn priority_groups(conditions: &[Condition]) -> Vec<&[Condition]> {
    let mut groups = Vec::new();
    let mut start = 0;

    for (i, condition) in conditions.iter().enumerate() {
        if condition.combinator() == Combinator::Or {
            if i > start {
                groups.push(&conditions[start..i]);
            }
            start = i;
        }
    }
    if start < conditions.len() {
        groups.push(&conditions[start..]);
    }

    groups
}
