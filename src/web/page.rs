use crate::models::overview::Overview;
use crate::utils::mins2readable;
use askama::Template;

pub struct RecordRow {
    pub id: i64,
    pub date: String,
    pub departure: String,
    pub ret: String,
    pub break_minutes: i64,
    pub deficit_minutes: i64,
}

pub struct WeekRow {
    pub id: i64,
    pub name: String,
    pub deficit_total: i64,
    pub deficit_readable: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub remaining_minutes: i64,
    pub remaining_readable: String,
    pub total_deficit_minutes: i64,
    pub total_deficit_readable: String,
    pub initial_allowance_readable: String,
    pub overdrawn: bool,
    pub records: Vec<RecordRow>,
    pub weeks: Vec<WeekRow>,
}

impl From<Overview> for IndexTemplate {
    fn from(o: Overview) -> Self {
        let b = o.balance;
        Self {
            remaining_minutes: b.remaining_minutes,
            remaining_readable: mins2readable(b.remaining_minutes, false, false),
            total_deficit_minutes: b.total_deficit_minutes,
            total_deficit_readable: mins2readable(b.total_deficit_minutes, false, false),
            initial_allowance_readable: mins2readable(b.initial_allowance_minutes, false, false),
            overdrawn: b.remaining_minutes < 0,
            records: o
                .records
                .iter()
                .map(|r| RecordRow {
                    id: r.id,
                    date: r.date_str(),
                    departure: r.departure_str(),
                    ret: r.return_str(),
                    break_minutes: r.break_minutes,
                    deficit_minutes: r.deficit_minutes,
                })
                .collect(),
            weeks: o
                .weeks
                .into_iter()
                .map(|w| WeekRow {
                    id: w.id,
                    deficit_readable: mins2readable(w.deficit_total, false, false),
                    name: w.name,
                    deficit_total: w.deficit_total,
                })
                .collect(),
        }
    }
}
