#[derive(Clone, Copy)]
pub enum Width {
    /// As wide as the widest cell
    Auto,

    /// Shrinks down to the given number of characters when the terminal is
    /// too narrow.
    ExpandWithMin(usize),
}

#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Which end of a cell is dropped when it doesn't fit
#[derive(Clone, Copy)]
pub enum Truncate {
    Left,
    Right,
}

pub struct Column<'a, TRow, TCol> {
    align: Align,
    truncate: Truncate,
    width: Width,
    title: Option<String>,
    data: TCol,
    get_content: &'a dyn Fn(&TRow, &TCol) -> String,
}

impl<'a, TRow, TCol> Column<'a, TRow, TCol> {
    pub fn new(
        data: TCol,
        get_content: &'a dyn Fn(&TRow, &TCol) -> String,
    ) -> Self {
        Self {
            align: Align::Left,
            truncate: Truncate::Right,
            width: Width::Auto,
            title: None,
            data,
            get_content,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_truncate(mut self, truncate: Truncate) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// The smallest width accepted, given the width of the widest cell
    fn min_width(&self, natural: usize) -> usize {
        match self.width {
            Width::Auto => natural,
            Width::ExpandWithMin(min) => min.min(natural),
        }
    }
}

enum Line {
    Titles,
    Rule,
    Cells(Vec<String>),
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
        }
    }
}

/// Rows of text laid out in columns, shrunk to fit the terminal
pub struct Table<'a, TRow, TCol> {
    columns: Vec<Column<'a, TRow, TCol>>,
    lines: Vec<Line>,
    settings: Settings,
}

impl<'a, TRow, TCol> Table<'a, TRow, TCol> {
    pub fn new(
        columns: Vec<Column<'a, TRow, TCol>>,
        settings: &Settings,
    ) -> Self {
        Self {
            columns,
            lines: Vec::new(),
            settings: settings.clone(),
        }
    }

    pub fn with_col_headers(mut self) -> Self {
        self.lines.push(Line::Titles);
        self.lines.push(Line::Rule);
        self
    }

    pub fn add_row(&mut self, row: &TRow) {
        let cells = self
            .columns
            .iter()
            .map(|col| (col.get_content)(row, &col.data))
            .collect();
        self.lines.push(Line::Cells(cells));
    }

    fn text<'b>(&'b self, line: &'b Line, colidx: usize) -> &'b str {
        match line {
            Line::Rule => "",
            Line::Titles => self
                .columns
                .get(colidx)
                .and_then(|col| col.title.as_deref())
                .unwrap_or(""),
            Line::Cells(cells) => cells.get(colidx).map_or("", String::as_str),
        }
    }

    /// Width allocated to each column, given the room left once the column
    /// separators are drawn.  When everything doesn't fit, the expandable
    /// columns share the space left by the others, but never go below their
    /// minimal width.
    fn widths(&self, room: usize) -> Vec<usize> {
        let natural: Vec<usize> = (0..self.columns.len())
            .map(|colidx| {
                self.lines
                    .iter()
                    .map(|line| self.text(line, colidx).chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        if natural.iter().sum::<usize>() <= room {
            return natural;
        }

        let rigid: usize = self
            .columns
            .iter()
            .zip(&natural)
            .map(|(col, w)| col.min_width(*w))
            .sum();
        let expandable = self
            .columns
            .iter()
            .filter(|col| matches!(col.width, Width::ExpandWithMin(_)))
            .count();
        let share = room.saturating_sub(rigid) / expandable.max(1);

        self.columns
            .iter()
            .zip(natural)
            .map(|(col, w)| match col.width {
                Width::Auto => w,
                Width::ExpandWithMin(_) => (col.min_width(w) + share).min(w),
            })
            .collect()
    }

    pub fn render(&self, max_width: usize) -> String {
        let seps = self.columns.len().saturating_sub(1)
            * self.settings.colsep.chars().count();
        let widths = self.widths(max_width.saturating_sub(seps));
        let mut result = String::new();

        for line in &self.lines {
            for (colidx, (col, width)) in
                self.columns.iter().zip(&widths).enumerate()
            {
                if colidx > 0 {
                    result.push_str(&self.settings.colsep);
                }
                let width = *width;
                match line {
                    Line::Rule => result.push_str(&"─".repeat(width)),
                    Line::Titles | Line::Cells(_) => {
                        let align = match line {
                            Line::Titles => Align::Center,
                            _ => col.align,
                        };
                        let text =
                            fit(self.text(line, colidx), col.truncate, width);
                        result.push_str(&match align {
                            Align::Left => format!("{text:<width$}"),
                            Align::Center => format!("{text:^width$}"),
                            Align::Right => format!("{text:>width$}"),
                        });
                    }
                }
            }
            result.push('\n');
        }
        result
    }
}

/// Drop characters from one end of text so that it is at most width long
fn fit(text: &str, truncate: Truncate, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    match truncate {
        Truncate::Right => text.chars().take(width).collect(),
        Truncate::Left => text.chars().skip(len - width).collect(),
    }
}
