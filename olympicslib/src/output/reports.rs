//! Table layouts for each query result.

use crate::query::{BestYears, CountrySummary, MedalList, YearTotals};

use super::layout::{Align, Column, ReportTable};
use super::report::Report;

impl MedalList {
    /// Name, Sport and Medal of the displayed entries, with all-match totals below.
    pub fn to_report(&self) -> Report {
        ReportTable::new(
            "Medalists:",
            vec![
                Column::new("Name", Align::Left),
                Column::new("Sport", Align::Left),
                Column::new("Medal", Align::Left),
            ],
        )
        .rows(self.rows.iter().map(|row| {
            vec![
                row.name.clone(),
                row.sport.clone(),
                row.medal.to_string(),
            ]
        }))
        .footer(format!("Total medals: {}", self.total))
        .layout()
    }
}

impl YearTotals {
    pub fn to_report(&self) -> Report {
        ReportTable::new(
            "Countries:",
            vec![
                Column::new("Country", Align::Left),
                Column::new("Gold", Align::Center),
                Column::new("Silver", Align::Center),
                Column::new("Bronze", Align::Center),
            ],
        )
        .rows(self.countries.iter().map(|row| {
            vec![
                row.country.clone(),
                row.medals.gold.to_string(),
                row.medals.silver.to_string(),
                row.medals.bronze.to_string(),
            ]
        }))
        .layout()
    }
}

impl BestYears {
    pub fn to_report(&self) -> Report {
        ReportTable::new(
            "Best Performances:",
            vec![
                Column::new("Country", Align::Left),
                Column::new("Year", Align::Center),
                Column::new("Medals", Align::Center),
            ],
        )
        .rows(self.rows.iter().map(|row| {
            vec![
                row.country.clone(),
                row.year.to_string(),
                row.medals.to_string(),
            ]
        }))
        .layout()
    }
}

impl CountrySummary {
    /// Free-text report: first appearance, best and worst edition, averages.
    pub fn to_report(&self) -> Report {
        let header = format!(
            "The first time in the Olympics was in {} in {} city.",
            self.first_year, self.first_city
        );
        let body = vec![
            format!(
                "Best performance game was {} with {} medals.",
                self.best.games,
                self.best.medals.total()
            ),
            format!(
                "Worst performance game was {} with {} medals.",
                self.worst.games,
                self.worst.medals.total()
            ),
        ];
        let footer = format!(
            "Average medal count: Gold: {:.2}, Silver: {:.2}, Bronze: {:.2}",
            self.average.gold, self.average.silver, self.average.bronze
        );
        Report::free_text(&self.country, &header, &body, &footer)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::fixtures::store;
    use crate::query::{BestYears, CountrySummary, MedalList, YearTotals};

    fn sample() -> crate::RecordStore {
        store(&[
            "1\tA\tUSA-1\tUSA\t2008 Summer\t2008\tBeijing\tSwimming\tGold",
            "2\tB\tUSA-1\tUSA\t2008 Summer\t2008\tBeijing\tJudo\tNA",
            "3\tLi Ning\tChina\tCHN\t2008 Summer\t2008\tBeijing\tGymnastics\tSilver",
            "4\tC\tUSA-2\tUSA\t2004 Summer\t2004\tAthina\tRowing\tBronze",
        ])
    }

    #[test]
    fn test_medal_list_report() {
        let report = MedalList::query(&sample(), "USA", 2008).unwrap().to_report();

        assert_eq!(report.header, " №   | Name |  Sport   | Medal |");
        assert_eq!(report.body, vec![" 1.  | A    | Swimming | Gold  |"]);
        assert_eq!(report.width(), 4 + 8 + 5 + 15);
        assert_eq!(report.title.trim(), "Medalists:");
        assert_eq!(
            report.footer.as_deref().map(str::trim),
            Some("Total medals: Gold: 1, Silver: 0, Bronze: 0")
        );
    }

    #[test]
    fn test_year_totals_report() {
        let report = YearTotals::query(&sample(), 2008).unwrap().to_report();

        assert_eq!(report.title.trim(), "Countries:");
        assert_eq!(report.header, " №   | Country | Gold | Silver | Bronze |");
        assert_eq!(
            report.body,
            vec![
                " 1.  | USA     |  1   |   0    |   0    |",
                " 2.  | China   |  0   |   1    |   0    |",
            ]
        );
        assert!(report.footer.is_none());
        assert_eq!(report.width(), 7 + 4 + 6 + 6 + 18);
    }

    #[test]
    fn test_best_years_report() {
        let report = BestYears::query(&sample(), &["USA"]).unwrap().to_report();

        assert_eq!(report.title.trim(), "Best Performances:");
        assert_eq!(report.header, " №   | Country | Year | Medals |");
        assert_eq!(
            report.body,
            vec![
                " 1.  | USA     | 2008 |   1    |",
                " 2.  | USA     | 2004 |   1    |",
            ]
        );
    }

    #[test]
    fn test_country_summary_report() {
        let report = CountrySummary::query(&sample(), "USA").unwrap().to_report();
        let header = "The first time in the Olympics was in 2004 in Athina city.";

        assert_eq!(report.header.trim_end(), header);
        assert_eq!(report.title.trim(), "USA");
        assert_eq!(
            report.body[0].trim(),
            "Best performance game was 2008 Summer with 1 medals."
        );
        assert_eq!(
            report.body[1].trim(),
            "Worst performance game was 2004 Summer with 1 medals."
        );
        let footer = "Average medal count: Gold: 0.50, Silver: 0.00, Bronze: 0.50";
        assert_eq!(report.footer.as_deref().map(str::trim), Some(footer));
        assert_eq!(report.width(), header.len().max(footer.len()));
        assert!(report.body.iter().all(|l| l.chars().count() == report.width()));
    }
}
