use crate::replay::{verify, Verdict};
use crate::solve;
use crate::TimeDelta;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub a: Vec<i64>,
    pub b: Vec<i64>,
    pub c: Vec<i64>,
}

impl Scenario {
    pub fn new(name: &'static str, a: &[i64], b: &[i64], c: &[i64]) -> Self {
        Self {
            name,
            a: a.to_vec(),
            b: b.to_vec(),
            c: c.to_vec(),
        }
    }
}

/// The fixed cases every change to the planner is checked against.
pub fn reference() -> Vec<Scenario> {
    vec![
        Scenario::new("Simple", &[10, 5], &[20], &[]),
        Scenario::new("Duplicates", &[5], &[10], &[10]),
        Scenario::new("Sorted bottom", &[50, 10], &[40], &[30]),
        Scenario::new("Nine boxes", &[1, 5, 8], &[2, 6, 9], &[3, 4, 7]),
    ]
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub verdict: Verdict<i64>,
    total_time: f64,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }

    pub fn report(&self, indent: usize) {
        let indent = " ".repeat(indent);
        let status = if self.passed() { "PASS" } else { "FAIL" };
        println!("{}[{}] {}", indent, status, self.name);
        println!(
            "{}  moves: {} (budget: {})",
            indent, self.verdict.moves, self.verdict.budget
        );
        println!("{}  solved in: {}", indent, self.total_time.humanize_seconds());
        println!(
            "{}  final: {}",
            indent,
            self.verdict
                .final_state
                .iter()
                .map(|(id, values)| format!("{}={:?}", id, values))
                .collect::<Vec<_>>()
                .join(" ")
        );
        for violation in self.verdict.violations.iter() {
            println!("{}  ! {}", indent, violation);
        }
    }
}

pub fn run(scenario: &Scenario, budget: usize) -> ScenarioReport {
    let start = Instant::now();
    let moves = solve(&scenario.a, &scenario.b, &scenario.c);
    let total_time = start.elapsed().as_secs_f64();

    let verdict = verify(&scenario.a, &scenario.b, &scenario.c, &moves, budget);
    info!(
        scenario = scenario.name,
        moves = moves.len(),
        passed = verdict.passed(),
        "scenario finished"
    );

    ScenarioReport {
        name: scenario.name,
        verdict,
        total_time,
    }
}

pub fn run_all(budget: usize) -> Vec<ScenarioReport> {
    reference()
        .iter()
        .map(|scenario| run(scenario, budget))
        .collect()
}
