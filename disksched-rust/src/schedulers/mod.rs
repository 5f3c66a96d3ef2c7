use log::{debug, log_enabled, trace, Level};

use crate::disk::{Direction, DiskGeometry, Head};
use crate::error::ConfigError;
use crate::movement::{compute_movement, find_split};
use crate::requests::RequestSet;


/// Service order produced by one algorithm, and how far the head moved to follow it.
///
/// SCAN and C-SCAN add boundary cylinders to `sequence` on top of the requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    pub sequence: Vec<usize>,
    pub movement: usize,
}

impl Schedule {
    fn from_sequence(sequence: Vec<usize>, start: usize) -> Self {
        let movement = compute_movement(&sequence, start);
        Schedule { sequence, movement }
    }
}

pub trait DiskScheduler {
    fn name(&self) -> &'static str;
    fn schedule(&self, requests: &RequestSet, geometry: &DiskGeometry, head: Head) -> Schedule;
}

/// First come first served: arrival order, untouched.
pub struct Fcfs;

impl DiskScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, requests: &RequestSet, _: &DiskGeometry, head: Head) -> Schedule {
        Schedule::from_sequence(requests.arrival().to_vec(), head.position)
    }
}

/// Shortest seek time first.
pub struct Sstf;

impl DiskScheduler for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, requests: &RequestSet, _: &DiskGeometry, head: Head) -> Schedule {
        let arrival = requests.arrival();
        let mut visited = vec![false; arrival.len()];
        let mut sequence = Vec::with_capacity(arrival.len());
        let mut track_head = head.position;

        while sequence.len() < arrival.len() {
            // closest unvisited request; on a tie the one that arrived first stays
            let mut best: Option<(usize, usize)> = None;
            for (i, &cylinder) in arrival.iter().enumerate() {
                if visited[i] {
                    continue;
                }
                let distance = cylinder.abs_diff(track_head);
                let closer = match best {
                    Some((_, min_distance)) => distance < min_distance,
                    None => true,
                };
                if closer {
                    best = Some((i, distance));
                }
            }
            let Some((index, _)) = best else {
                break;
            };

            if log_enabled!(Level::Trace) {
                let queue_string = arrival
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !visited[*i])
                    .map(|(i, cylinder)| format!("{}:{}", i, cylinder.abs_diff(track_head)))
                    .collect::<Vec<_>>()
                    .join(" ");
                trace!("\tGet: ({}) --> {}", queue_string, arrival[index]);
            }

            visited[index] = true;
            track_head = arrival[index];
            sequence.push(track_head);
        }

        Schedule::from_sequence(sequence, head.position)
    }
}

/// Requests strictly below the split, nearest first.
fn below_descending(sorted: &[usize], split: usize) -> impl Iterator<Item = usize> + '_ {
    sorted[..split].iter().rev().copied()
}

/// Requests at or above the split, nearest first.
fn above_ascending(sorted: &[usize], split: usize) -> impl Iterator<Item = usize> + '_ {
    sorted[split..].iter().copied()
}

// Sweep toward `direction`, then reverse. With `to_edge` the head runs all the way to the
// physical edge before turning (SCAN), otherwise it turns at the last request (LOOK).
fn reversing_sweep(
    requests: &RequestSet,
    geometry: &DiskGeometry,
    head: Head,
    to_edge: bool,
) -> Vec<usize> {
    let sorted = requests.sorted();
    let split = find_split(sorted, head.position);
    debug!("split index {} for head at {}", split, head.position);

    let mut sequence = Vec::with_capacity(sorted.len() + 1);
    match head.direction {
        Direction::Left => {
            sequence.extend(below_descending(sorted, split));
            if to_edge {
                sequence.push(0);
            }
            sequence.extend(above_ascending(sorted, split));
        }
        Direction::Right => {
            sequence.extend(above_ascending(sorted, split));
            if to_edge {
                sequence.push(geometry.max_cylinder());
            }
            sequence.extend(below_descending(sorted, split));
        }
    }
    sequence
}

// Sweep toward `direction` only. After the last request the head wraps to the far side and
// keeps going the same way. With `to_edge` it visits both edges around the wrap (C-SCAN),
// otherwise it jumps request to request (C-LOOK).
fn circular_sweep(
    requests: &RequestSet,
    geometry: &DiskGeometry,
    head: Head,
    to_edge: bool,
) -> Vec<usize> {
    let sorted = requests.sorted();
    let split = find_split(sorted, head.position);
    debug!("split index {} for head at {}", split, head.position);

    let mut sequence = Vec::with_capacity(sorted.len() + 2);
    match head.direction {
        Direction::Left => {
            sequence.extend(below_descending(sorted, split));
            if to_edge {
                sequence.push(0);
                sequence.push(geometry.max_cylinder());
            }
            sequence.extend(sorted[split..].iter().rev());
        }
        Direction::Right => {
            sequence.extend(above_ascending(sorted, split));
            if to_edge {
                sequence.push(geometry.max_cylinder());
                sequence.push(0);
            }
            sequence.extend(&sorted[..split]);
        }
    }
    sequence
}

/// The elevator: sweep to the disk edge, then come back.
pub struct Scan;

impl DiskScheduler for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, requests: &RequestSet, geometry: &DiskGeometry, head: Head) -> Schedule {
        Schedule::from_sequence(
            reversing_sweep(requests, geometry, head, true),
            head.position,
        )
    }
}

pub struct CScan;

impl DiskScheduler for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, requests: &RequestSet, geometry: &DiskGeometry, head: Head) -> Schedule {
        Schedule::from_sequence(
            circular_sweep(requests, geometry, head, true),
            head.position,
        )
    }
}

pub struct Look;

impl DiskScheduler for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn schedule(&self, requests: &RequestSet, geometry: &DiskGeometry, head: Head) -> Schedule {
        Schedule::from_sequence(
            reversing_sweep(requests, geometry, head, false),
            head.position,
        )
    }
}

pub struct CLook;

impl DiskScheduler for CLook {
    fn name(&self) -> &'static str {
        "C-LOOK"
    }

    fn schedule(&self, requests: &RequestSet, geometry: &DiskGeometry, head: Head) -> Schedule {
        Schedule::from_sequence(
            circular_sweep(requests, geometry, head, false),
            head.position,
        )
    }
}

/// Selects a scheduler by its command line letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
}

impl Algorithm {
    /// Every algorithm, in the order the report prints them by default.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
        Algorithm::Look,
        Algorithm::CLook,
    ];

    pub fn from_letter(letter: char) -> Result<Self, ConfigError> {
        match letter {
            'F' => Ok(Algorithm::Fcfs),
            'S' => Ok(Algorithm::Sstf),
            's' => Ok(Algorithm::Scan),
            'c' => Ok(Algorithm::CScan),
            'l' => Ok(Algorithm::Look),
            'C' => Ok(Algorithm::CLook),
            other => Err(ConfigError::UnknownAlgorithm(other)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Algorithm::Fcfs => 'F',
            Algorithm::Sstf => 'S',
            Algorithm::Scan => 's',
            Algorithm::CScan => 'c',
            Algorithm::Look => 'l',
            Algorithm::CLook => 'C',
        }
    }

    /// Parses a string of letters such as `"FSsclC"`, keeping the given order.
    pub fn parse_list(spec: &str) -> Result<Vec<Self>, ConfigError> {
        spec.chars().map(Algorithm::from_letter).collect()
    }

    pub fn scheduler(self) -> Box<dyn DiskScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sstf => Box::new(Sstf),
            Algorithm::Scan => Box::new(Scan),
            Algorithm::CScan => Box::new(CScan),
            Algorithm::Look => Box::new(Look),
            Algorithm::CLook => Box::new(CLook),
        }
    }

    pub fn name(self) -> &'static str {
        self.scheduler().name()
    }
}

/// Runs each algorithm in turn over the same requests. Nothing is shared between runs.
pub fn run_all(
    algorithms: &[Algorithm],
    requests: &RequestSet,
    geometry: &DiskGeometry,
    head: Head,
) -> Vec<(Algorithm, Schedule)> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let schedule = algorithm.scheduler().schedule(requests, geometry, head);
            debug!(
                "{}: {} entries, {} cylinders of movement",
                algorithm.name(),
                schedule.sequence.len(),
                schedule.movement
            );
            (algorithm, schedule)
        })
        .collect()
}
