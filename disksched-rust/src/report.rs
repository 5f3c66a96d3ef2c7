// Text the binary prints. Kept as plain strings so the layout can be checked in tests.
use crate::disk::Head;
use crate::schedulers::{Algorithm, Schedule};

pub fn header(request_count: usize, head: &Head) -> String {
    format!(
        "Total requests = {}\nInitial Head Position: {}\nDirection of Head: {}\n\n",
        request_count, head.position, head.direction
    )
}

/// One algorithm's block: its service order, then the total movement.
pub fn section(name: &str, schedule: &Schedule) -> String {
    let order = schedule
        .sequence
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{name} DISK SCHEDULING ALGORITHM:\n\n{order}\n\n{name} - Total head movements = {}\n\n",
        schedule.movement
    )
}

pub fn summary(results: &[(Algorithm, Schedule)]) -> String {
    let mut out = String::from("SUMMARY:\n");
    for (algorithm, schedule) in results {
        out.push_str(&format!("{:>8}: {:6}\n", algorithm.name(), schedule.movement));
    }
    // first listed wins a tie
    if let Some((algorithm, schedule)) = results.iter().min_by_key(|(_, s)| s.movement) {
        out.push_str(&format!(
            "Least head movement: {} ({})\n",
            algorithm.name(),
            schedule.movement
        ));
    }
    out
}
