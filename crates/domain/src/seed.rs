//! The programs the application starts with.

use crate::{
    Day, Exercise, IdGenerator, Name, NameError, Program, ProgramID, TargetSet, Visibility, Week,
};

type Sets = &'static [(&'static str, &'static str, Option<&'static str>)];

pub fn programs(ids: &mut impl IdGenerator) -> Result<Vec<Program>, NameError> {
    Ok(vec![
        gzclp(ids)?,
        five_three_one(ids)?,
        push_pull_legs(ids)?,
        home_basics(ids)?,
    ])
}

fn gzclp(ids: &mut impl IdGenerator) -> Result<Program, NameError> {
    const T1: Sets = &[
        ("3", "85%", None),
        ("3", "85%", None),
        ("3", "85%", None),
        ("3", "85%", None),
        ("3+", "85%", None),
    ];
    const T2: Sets = &[
        ("10", "RPE 7-8", None),
        ("10", "RPE 7-8", None),
        ("10", "RPE 7-8", None),
    ];
    const T3: Sets = &[
        ("15", "RPE 8", None),
        ("15", "RPE 8", None),
        ("25+", "RPE 9-10", None),
    ];

    let mut weeks = vec![];
    for n in 1..=2 {
        let days = vec![
            day(ids, "Day A1", &[("Squat", T1), ("Bench Press", T2), ("Lat Pulldown", T3)]),
            day(
                ids,
                "Day B1",
                &[("Overhead Press", T1), ("Deadlift", T2), ("Dumbbell Row", T3)],
            ),
            day(ids, "Day A2", &[("Bench Press", T1), ("Squat", T2), ("Lat Pulldown", T3)]),
            day(
                ids,
                "Day B2",
                &[("Deadlift", T1), ("Overhead Press", T2), ("Dumbbell Row", T3)],
            ),
        ];
        weeks.push(week(ids, &format!("Week {n}"), days));
    }

    Ok(Program {
        id: ids.next_id().into(),
        name: Name::new("GZCLP")?,
        author: String::from("Cody LeFever"),
        description: String::from(
            "GZCLP is a highly effective and popular linear progression program for beginners.",
        ),
        visibility: Visibility::Public,
        weeks,
    })
}

fn five_three_one(ids: &mut impl IdGenerator) -> Result<Program, NameError> {
    const BBB: Sets = &[
        ("10", "50%", None),
        ("10", "50%", None),
        ("10", "50%", None),
        ("10", "50%", None),
        ("10", "50%", None),
    ];

    const FIVES: Sets = &[("5", "65%", None), ("5", "75%", None), ("5+", "85%", None)];
    const THREES: Sets = &[("3", "70%", None), ("3", "80%", None), ("3+", "90%", None)];
    const FIVE_THREE_ONE: Sets = &[("5", "75%", None), ("3", "85%", None), ("1+", "95%", None)];

    let mut weeks = vec![];
    for (n, main) in [FIVES, THREES, FIVE_THREE_ONE].into_iter().enumerate() {
        let days = vec![
            day(ids, "Press", &[("Overhead Press", main), ("Overhead Press", BBB)]),
            day(ids, "Deadlift", &[("Deadlift", main), ("Deadlift", BBB)]),
            day(ids, "Bench", &[("Bench Press", main), ("Bench Press", BBB)]),
            day(ids, "Squat", &[("Squat", main), ("Squat", BBB)]),
        ];
        weeks.push(week(ids, &format!("Week {}", n + 1), days));
    }

    Ok(Program {
        id: ids.next_id().into(),
        name: Name::new("5/3/1 Boring But Big")?,
        author: String::from("Jim Wendler"),
        description: String::from(
            "Four day strength program built around a monthly wave with high volume assistance.",
        ),
        visibility: Visibility::Public,
        weeks,
    })
}

fn push_pull_legs(ids: &mut impl IdGenerator) -> Result<Program, NameError> {
    const HEAVY: Sets = &[
        ("5", "RPE 8", None),
        ("5", "RPE 8", None),
        ("5", "RPE 8", None),
    ];
    const ACCESSORY: Sets = &[
        ("8-12", "RPE 8-9", None),
        ("8-12", "RPE 8-9", None),
        ("8-12", "RPE 8-9", None),
    ];

    let days = vec![
        day(
            ids,
            "Push",
            &[
                ("Bench Press", HEAVY),
                ("Overhead Press", ACCESSORY),
                ("Triceps Pushdown", ACCESSORY),
            ],
        ),
        day(
            ids,
            "Pull",
            &[
                ("Deadlift", HEAVY),
                ("Pull Up", ACCESSORY),
                ("Barbell Curl", ACCESSORY),
            ],
        ),
        day(
            ids,
            "Legs",
            &[
                ("Squat", HEAVY),
                ("Romanian Deadlift", ACCESSORY),
                ("Calf Raise", ACCESSORY),
            ],
        ),
    ];
    let weeks = vec![week(ids, "Week 1", days)];

    Ok(Program {
        id: ids.next_id().into(),
        name: Name::new("Push Pull Legs")?,
        author: String::from("Metallicadpa"),
        description: String::from("Six day split alternating push, pull and leg days."),
        visibility: Visibility::Public,
        weeks,
    })
}

fn home_basics(ids: &mut impl IdGenerator) -> Result<Program, NameError> {
    const BODYWEIGHT: Sets = &[
        ("10-15", "RPE 8", Some("0")),
        ("10-15", "RPE 8", Some("0")),
        ("10-15", "RPE 9", Some("0")),
    ];

    let days = vec![day(
        ids,
        "Full Body",
        &[
            ("Push Up", BODYWEIGHT),
            ("Inverted Row", BODYWEIGHT),
            ("Split Squat", BODYWEIGHT),
        ],
    )];
    let weeks = vec![week(ids, "Week 1", days)];

    Ok(Program {
        id: ids.next_id().into(),
        name: Name::new("Home Basics")?,
        author: String::from("You"),
        description: String::from("Minimal equipment full body routine."),
        visibility: Visibility::Private,
        weeks,
    })
}

/// Identifier of the first seeded program.
#[must_use]
pub fn default_program(programs: &[Program]) -> Option<ProgramID> {
    programs.first().map(|p| p.id)
}

fn week(ids: &mut impl IdGenerator, name: &str, days: Vec<Day>) -> Week {
    Week {
        id: ids.next_id().into(),
        name: name.to_string(),
        days,
    }
}

fn day(ids: &mut impl IdGenerator, name: &str, exercises: &[(&str, Sets)]) -> Day {
    Day {
        id: ids.next_id().into(),
        name: name.to_string(),
        exercises: exercises
            .iter()
            .map(|(name, sets)| Exercise {
                id: ids.next_id().into(),
                name: (*name).to_string(),
                sets: sets
                    .iter()
                    .map(|(reps, intensity, weight)| {
                        TargetSet::new(ids.next_id().into(), reps, intensity, *weight)
                    })
                    .collect(),
            })
            .collect(),
    }
}
