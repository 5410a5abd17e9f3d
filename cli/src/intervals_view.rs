use crate::tables::{Align, Column, Table, Truncate, Width};
use interval_set::{DisjointIntervalSet, Interval, Order};

#[derive(Clone, Copy)]
enum Field {
    Index,
    Interval,
    Infimum,
    Supremum,
    Singleton,
}

/// Show one interval of the set per row
pub fn intervals_view<O: Order<i64>>(
    set: &DisjointIntervalSet<i64, O>,
    settings: &crate::tables::Settings,
    max_width: usize,
) -> String {
    type Row<'a, O> = (usize, &'a Interval<i64, O>);

    let image = |row: &Row<'_, O>, field: &Field| {
        let (idx, intv) = *row;
        match field {
            Field::Index => (idx + 1).to_string(),
            Field::Interval => intv.to_string(),
            Field::Infimum => match intv.infimum() {
                Ok(v) if intv.is_infimum_included().unwrap_or(false) => {
                    format!("{} incl.", v)
                }
                Ok(v) => v.to_string(),
                Err(_) => "-inf".to_string(),
            },
            Field::Supremum => match intv.supremum() {
                Ok(v) if intv.is_supremum_included().unwrap_or(false) => {
                    format!("{} incl.", v)
                }
                Ok(v) => v.to_string(),
                Err(_) => "+inf".to_string(),
            },
            Field::Singleton => {
                (if intv.is_set() { "yes" } else { "" }).to_string()
            }
        }
    };

    let columns = vec![
        Column::new(Field::Index, &image)
            .with_title("#")
            .with_align(Align::Right),
        Column::new(Field::Interval, &image)
            .with_title("Interval")
            .with_width(Width::ExpandWithMin(8))
            .with_truncate(Truncate::Left),
        Column::new(Field::Infimum, &image)
            .with_title("Infimum")
            .with_align(Align::Right),
        Column::new(Field::Supremum, &image)
            .with_title("Supremum")
            .with_align(Align::Right),
        Column::new(Field::Singleton, &image)
            .with_title("Single")
            .with_align(Align::Center),
    ];

    let mut table = Table::new(columns, settings).with_col_headers();
    for row in set.iter().enumerate() {
        table.add_row(&row);
    }
    table.render(max_width)
}
