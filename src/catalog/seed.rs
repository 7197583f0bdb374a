//! Built-in session templates.
//!
//! Identifiers are grouped by level: Beginner 1-19, Intermediate 20-39,
//! Advanced 40-59, Elite 60-79, all-levels 80-89.

use super::types::{Archetype, Level, SessionTemplate, TemplateId};
use crate::periodization::Phase::{self, Acceleration as A, Foundation as F, MaxVelocity as M, Peak as P};
use crate::planning::MixArchetype::{self, *};

#[allow(clippy::too_many_arguments)]
fn sprint(
    id: TemplateId,
    name: &str,
    distance: u32,
    reps: u32,
    rest: u32,
    focus: &str,
    level: Level,
    phases: &[Phase],
    mix: MixArchetype,
) -> SessionTemplate {
    SessionTemplate::new(id, name, distance, reps, rest, level)
        .with_focus(focus)
        .with_phases(phases)
        .with_mix(mix)
}

fn benchmark(id: TemplateId, name: &str, distance: u32, level: Level) -> SessionTemplate {
    SessionTemplate::new(id, name, distance, 1, 10, level)
        .with_focus("Benchmark")
        .with_archetype(Archetype::Benchmark)
}

fn tempo_recovery(id: TemplateId, name: &str, distance: u32, reps: u32, level: Level) -> SessionTemplate {
    SessionTemplate::new(id, name, distance, reps, 2, level)
        .with_focus("Light tempo work for active recovery")
        .with_archetype(Archetype::ActiveRecovery)
}

fn untagged(
    id: TemplateId,
    name: &str,
    (distance, reps, rest): (u32, u32, u32),
    focus: &str,
    level: Level,
    archetype: Archetype,
    phases: &[Phase],
) -> SessionTemplate {
    SessionTemplate::new(id, name, distance, reps, rest, level)
        .with_focus(focus)
        .with_archetype(archetype)
        .with_phases(phases)
}

/// Generate the built-in template set.
pub fn builtin_templates() -> Vec<SessionTemplate> {
    use Level::*;

    vec![
        // Beginner
        sprint(1, "10 yd Starts", 10, 8, 1, "Acceleration", Beginner, &[F, A], Speed),
        sprint(2, "15 yd Starts", 15, 10, 1, "Explosive Starts", Beginner, &[F], Speed),
        sprint(3, "20 yd Accel", 20, 6, 2, "Early Acceleration", Beginner, &[F, A], Speed),
        sprint(4, "25 yd Accel", 25, 8, 2, "Drive Phase", Beginner, &[F, A], Speed),
        sprint(5, "30 yd Drive", 30, 6, 2, "Drive Phase", Beginner, &[F, A], Speed),
        sprint(6, "10-20-30 yd Pyramid", 30, 3, 2, "Acceleration Progression", Beginner, &[F, A], PyramidUp),
        sprint(7, "10+20 yd Ladder", 20, 4, 1, "Acceleration Progression", Beginner, &[F, A], PyramidUp),
        sprint(8, "Flying 10 yd", 10, 6, 2, "Max Velocity", Beginner, &[M, P], Flying),
        sprint(9, "Flying 15 yd", 15, 6, 2, "Max Velocity", Beginner, &[M, P], Flying),
        sprint(10, "40 yd Repeats", 40, 6, 3, "Max Speed", Beginner, &[M], Speed),
        sprint(11, "50 yd Build-Ups", 50, 4, 3, "Speed Endurance", Beginner, &[M, P], Endurance),
        sprint(12, "30-20-10 yd Downward Pyramid", 30, 3, 2, "Acceleration Mechanics", Beginner, &[F, A], PyramidDown),
        sprint(13, "10-20-30-20-10 yd Full Pyramid", 30, 2, 2, "Acceleration to Top Speed", Beginner, &[F, A, M], PyramidUpDown),
        sprint(14, "60 yd Repeats", 60, 3, 4, "Repeat Sprints", Beginner, &[P], Endurance),
        benchmark(15, "40 yd Time Trial", 40, Beginner),
        benchmark(16, "30 yd Time Trial", 30, Beginner),
        tempo_recovery(17, "20 yd Tempo", 20, 6, Beginner),
        untagged(18, "Tempo Strides", (60, 6, 2), "Aerobic Tempo", Beginner, Archetype::Tempo, &[F]),
        // Intermediate
        sprint(20, "20 yd Block Starts", 20, 8, 2, "Acceleration", Intermediate, &[F, A], Speed),
        sprint(21, "30 yd Drive", 30, 6, 2, "Drive Phase", Intermediate, &[F, A], Speed),
        sprint(22, "Split 20+30 yd", 30, 4, 2, "Acceleration to Drive", Intermediate, &[F, A], Speed),
        sprint(23, "20-30-40 yd Pyramid", 40, 3, 2, "Acceleration Progression", Intermediate, &[F, A, M], PyramidUp),
        sprint(24, "40-30-20 yd Downward Pyramid", 40, 3, 2, "Acceleration Mechanics", Intermediate, &[F, A], PyramidDown),
        sprint(25, "20-40-60-40-20 yd Full Pyramid", 60, 2, 3, "Acceleration to Max Speed", Intermediate, &[A, M, P], PyramidUpDown),
        sprint(26, "Flying 20 yd", 20, 6, 2, "Max Velocity", Intermediate, &[M, P], Flying),
        sprint(27, "Flying 30 yd", 30, 5, 3, "Max Velocity", Intermediate, &[M, P], Flying),
        sprint(28, "60 yd Fly", 60, 4, 4, "Top-End Speed", Intermediate, &[M, P], Flying),
        sprint(29, "40 yd x6", 40, 6, 2, "Speed", Intermediate, &[M], Speed),
        sprint(30, "70 yd Build", 70, 4, 4, "Speed Endurance", Intermediate, &[M, P], Endurance),
        sprint(31, "80 yd Repeats", 80, 3, 5, "Repeat Sprints", Intermediate, &[P], Endurance),
        benchmark(32, "40 yd Time Trial", 40, Intermediate),
        benchmark(33, "50 yd Time Trial", 50, Intermediate),
        tempo_recovery(34, "40 yd Tempo", 40, 4, Intermediate),
        untagged(35, "Sprint Complex", (40, 5, 3), "Acceleration and Max Velocity", Intermediate, Archetype::Comprehensive, &[A, M]),
        // Advanced
        sprint(40, "20 yd Resisted Starts", 20, 6, 3, "Acceleration", Advanced, &[F, A], Speed),
        sprint(41, "30 yd Sled Drive", 30, 5, 3, "Drive Phase", Advanced, &[F, A], Speed),
        sprint(42, "30-40-50 yd Ladder", 50, 3, 3, "Acceleration Progression", Advanced, &[F, A], PyramidUp),
        sprint(43, "50-40-30 yd Downward Pyramid", 50, 3, 3, "Drive Phase", Advanced, &[F, A], PyramidDown),
        sprint(44, "30-50-70-50-30 yd Full Pyramid", 70, 2, 4, "Speed Endurance", Advanced, &[M, P], PyramidUpDown),
        sprint(45, "Flying 35 yd", 35, 4, 4, "Max Velocity", Advanced, &[M, P], Flying),
        sprint(46, "Flying 40 yd", 40, 4, 4, "Max Velocity", Advanced, &[M, P], Flying),
        sprint(47, "75 yd Sprints", 75, 3, 5, "Top-End Speed", Advanced, &[M, P], Endurance),
        sprint(48, "90 yd Sprints", 90, 3, 5, "Top-End Speed", Advanced, &[M, P], Endurance),
        sprint(49, "100 yd Max", 100, 2, 6, "Peak Velocity", Advanced, &[M, P], Endurance),
        sprint(50, "80 yd Repeats", 80, 3, 5, "Repeat Sprints", Advanced, &[P], Endurance),
        benchmark(51, "40 yd Time Trial", 40, Advanced),
        benchmark(52, "60 yd Time Trial", 60, Advanced),
        tempo_recovery(53, "60 yd Tempo", 60, 3, Advanced),
        untagged(54, "Contrast Sprints", (40, 6, 4), "Acceleration and Max Velocity", Advanced, Archetype::Comprehensive, &[A, M]),
        sprint(55, "20 yd Starts", 20, 6, 2, "Starts", Advanced, &[F], Speed),
        // Elite
        sprint(60, "10 yd Reaction Starts", 10, 10, 2, "Acceleration", Elite, &[F, A], Speed),
        sprint(61, "30 yd Heavy Sled", 30, 5, 4, "Drive Phase", Elite, &[F, A], Speed),
        sprint(62, "40-50-60 yd Ladder", 60, 3, 4, "Acceleration Progression", Elite, &[F, A], PyramidUp),
        sprint(63, "60-40-20 yd Downward Pyramid", 60, 3, 4, "Drive Phase", Elite, &[F, A], PyramidDown),
        sprint(64, "40-60-80-60-40 yd Full Pyramid", 80, 2, 5, "Speed Endurance", Elite, &[M, P], PyramidUpDown),
        sprint(65, "Flying 40 yd Elite", 40, 5, 5, "Max Velocity", Elite, &[M, P], Flying),
        sprint(66, "Flying 50 yd", 50, 3, 5, "Max Velocity", Elite, &[M, P], Flying),
        sprint(67, "Overspeed 40s", 40, 5, 5, "Max Speed", Elite, &[M], Flying),
        sprint(68, "100 yd Max", 100, 3, 6, "Peak Velocity", Elite, &[M, P], Endurance),
        sprint(69, "120 yd Speed Reserve", 120, 2, 8, "Speed Endurance", Elite, &[M, P], Endurance),
        sprint(70, "150 yd Repeats", 150, 2, 8, "Repeat Sprints", Elite, &[P], Endurance),
        benchmark(71, "Elite 40 yd Time Trial", 40, Elite),
        benchmark(72, "Elite 50 yd Time Trial", 50, Elite),
        benchmark(73, "Elite 60 yd Time Trial", 60, Elite),
        tempo_recovery(74, "80 yd Tempo", 80, 3, Elite),
        untagged(75, "Race Simulation", (40, 4, 6), "Peak Performance", Elite, Archetype::Comprehensive, &[P]),
        sprint(76, "Block Start 20s", 20, 8, 3, "Starts", Elite, &[F], Speed),
        // All levels
        sprint(80, "10-30-50-70 yd Challenge", 70, 4, 3, "All-Level Adaptable", AllLevels, &[M, P], PyramidUp),
        sprint(81, "20-50-80-50-20 yd Full Pyramid", 80, 5, 3, "Universal Peak Training", AllLevels, &[P], PyramidUpDown),
        tempo_recovery(82, "Mobility and Tempo Flow", 100, 4, AllLevels),
        untagged(83, "Drill Circuit", (20, 6, 1), "Acceleration Mechanics", AllLevels, Archetype::Comprehensive, &[F, A]),
    ]
}
