use crate::core::models::TaskCandidate;

/// Tasks grouped by tier, most urgent first. The sort is stable, so tasks of one
/// tier keep their extraction order.
pub fn placement_order(tasks: &[TaskCandidate]) -> Vec<&TaskCandidate> {
    let mut ordered: Vec<_> = tasks.iter().collect();
    ordered.sort_by_key(|task| task.urgency);
    ordered
}
