//! Shared fixtures for the engine unit tests.
use chrono::NaiveDate;

use crate::{Costs, Expense, Money, RateLine, YesNo};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Teresina survey: total 1.585,00, profit 3.415,00.
pub(crate) fn reference_expense() -> Expense {
    let mut expense = Expense {
        id: Some("1".to_string()),
        start_date: date(2024, 1, 15),
        end_date: date(2024, 1, 20),
        state: "PI".to_string(),
        city: "Teresina".to_string(),
        institute: "Piauí Vox".to_string(),
        registered: YesNo::Yes,
        registration_number: Some("BR-00001/2024".to_string()),
        has_contractor: YesNo::Yes,
        contractor_name: Some("Partido ABC".to_string()),
        researcher_count: 3,
        researcher_names: vec![
            "João Silva".to_string(),
            "Maria Santos".to_string(),
            "Pedro Costa".to_string(),
        ],
        closed_value: Money::new(500_000),
        costs: Costs {
            questionnaire: RateLine::new(1.5, Money::new(1_000)),
            car_diem: RateLine::new(2.0, Money::new(15_000)),
            meal_diem: RateLine::new(3.0, Money::new(8_000)),
            lodging: Money::new(30_000),
            fuel: Money::new(20_000),
            system: Money::new(10_000),
            moto_taxi: Money::new(5_000),
            statistician: Money::new(40_000),
            other: Money::new(7_500),
        },
        ..Expense::default()
    };
    expense.refresh_totals();
    expense
}

/// São Luís survey: total 1.247,00, profit 2.253,00.
pub(crate) fn second_expense() -> Expense {
    let mut expense = Expense {
        id: Some("2".to_string()),
        start_date: date(2024, 2, 10),
        end_date: date(2024, 2, 15),
        state: "MA".to_string(),
        city: "São Luís".to_string(),
        institute: "Estimativa".to_string(),
        researcher_count: 2,
        researcher_names: vec!["Ana Oliveira".to_string(), "Carlos Lima".to_string()],
        closed_value: Money::new(350_000),
        costs: Costs {
            questionnaire: RateLine::new(1.0, Money::new(1_200)),
            car_diem: RateLine::new(1.5, Money::new(12_000)),
            meal_diem: RateLine::new(2.5, Money::new(7_000)),
            lodging: Money::new(25_000),
            fuel: Money::new(15_000),
            system: Money::new(8_000),
            moto_taxi: Money::new(4_000),
            statistician: Money::new(30_000),
            other: Money::new(6_000),
        },
        ..Expense::default()
    };
    expense.refresh_totals();
    expense
}
