use crate::config::Config;
use crate::core::models::{Extraction, WeeklyPlan};
use crate::ui::display_data::{DisplayDataBuilder, PlanSection};
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use std::io;
use std::io::Write;

const PLAN_HEADERS: [&str; 4] = ["ID", "TASK", "CATEGORY", "URGENCY"];
const EMPTY_DAY: &str = "Nothing planned.";

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        let util = WidthUtil::default();
        Self {
            printer: TablePrinter::new().with_max_width(util.terminal_width()),
            util,
            data: DisplayDataBuilder::new(),
        }
    }

    /// Uncolored output at a fixed width, for pipes and tests.
    pub fn plain(width: usize) -> Self {
        Self {
            printer: TablePrinter::new().with_max_width(width),
            util: WidthUtil::default(),
            data: DisplayDataBuilder::plain(),
        }
    }

    pub fn display_config(&self, config: &Config) {
        let _ = self.render_config(config, &mut io::stdout());
    }

    pub fn render_config<W: Write>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let headers = ["KEY", "DESCRIPTION", "VALUE"];
        let rows: Vec<Vec<String>> = config
            .rows()
            .iter()
            .map(|(k, d, v)| vec![k.clone(), d.clone(), v.clone()])
            .collect();

        self.printer.render_table(
            "Config",
            &headers,
            &rows,
            Some("No config items found."),
            None,
            out,
        )
    }

    pub fn display_tasks(&self, extraction: &Extraction) {
        let _ = self.render_tasks(extraction, &mut io::stdout());
    }

    pub fn render_tasks<W: Write>(&self, extraction: &Extraction, out: &mut W) -> io::Result<()> {
        let headers = ["ID", "TASK", "CATEGORY", "URGENCY", "CUE"];
        let rows = self.data.task_rows(&extraction.tasks);
        self.printer.render_table(
            "Tasks",
            &headers,
            &rows,
            Some("No tasks found."),
            None,
            out,
        )?;

        if extraction.is_empty() {
            return Ok(());
        }
        let s = &extraction.summary;
        writeln!(
            out,
            "{} task(s): {} urgent, {} soon, {} normal, {} low",
            s.total_tasks, s.urgent, s.soon, s.normal, s.low
        )
    }

    pub fn display_rationales(&self, extraction: &Extraction) {
        let rows = self.data.rationale_rows(&extraction.tasks);
        self.printer
            .print_table("Why", &["ID", "RATIONALE"], &rows, None, None);
    }

    pub fn render_plan<W: Write>(&self, plan: &WeeklyPlan, out: &mut W) -> io::Result<()> {
        let sections = self.data.build_plan_sections(plan);
        let max_width = self.plan_max_width(&sections);

        self.printer.render_banner("Weekly plan", max_width, out)?;
        for s in &sections {
            let empty = if s.rows.is_empty() {
                Some(EMPTY_DAY)
            } else {
                None
            };
            self.printer.render_table(
                &s.title,
                &PLAN_HEADERS,
                &s.rows,
                empty,
                Some(max_width),
                out,
            )?;
        }
        Ok(())
    }

    pub fn display_plan(&self, plan: &WeeklyPlan) {
        let _ = self.render_plan(plan, &mut io::stdout());
    }

    fn plan_max_width(&self, sections: &[PlanSection]) -> usize {
        let mut max_width = self.util.visible_width("WEEKLY PLAN");
        for s in sections {
            let table_w = self.printer.compute_table_width(&PLAN_HEADERS, &s.rows);
            let title_w = self.util.visible_width(&s.title);
            let empty_w = if s.rows.is_empty() {
                self.util.visible_width(EMPTY_DAY)
            } else {
                0
            };
            max_width = max_width.max(table_w.max(title_w).max(empty_w));
        }
        max_width
    }
}
