use chrono::NaiveDate;
use tracing::info;

use crate::{
    service::{EmployeeService, ServiceResult},
    store::EmployeeFields,
};

/// Inserts two sample records for local demos. Skipped when the table
/// already has rows, so a restart does not trip the email unique index.
pub async fn seed_demo(service: &EmployeeService) -> ServiceResult<()> {
    if service.count().await? > 0 {
        info!("employees table not empty; skipping demo seed");
        return Ok(());
    }
    for fields in demo_employees() {
        let saved = service.create(fields).await?;
        info!(id = saved.id, email = %saved.email, "seeded demo employee");
    }
    Ok(())
}

fn demo_employees() -> Vec<EmployeeFields> {
    vec![
        EmployeeFields {
            first_name: "John".into(),
            middle_name: Some("A".into()),
            last_name: "Doe".into(),
            location_city: "New York".into(),
            address: "123 Street".into(),
            date_of_birth: date(1990, 1, 1),
            telephone: "1234567890".into(),
            position_title: "Developer".into(),
            hire_date: date(2020, 1, 1),
            email: "john.doe@example.com".into(),
            salary: 60000.0,
            status: "Active".into(),
        },
        EmployeeFields {
            first_name: "Jane".into(),
            middle_name: Some("B".into()),
            last_name: "Smith".into(),
            location_city: "Chicago".into(),
            address: "456 Avenue".into(),
            date_of_birth: date(1985, 2, 2),
            telephone: "0987654321".into(),
            position_title: "Manager".into(),
            hire_date: date(2015, 2, 2),
            email: "jane.smith@example.com".into(),
            salary: 75000.0,
            status: "Active".into(),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid literal date")
}
