//! 学生列表面板状态

use school_dashboard_core::types::{FilterCriteria, GradeLevel, StudentRecord};

/// 筛选栏控件的数量（搜索、年级、学年）
const CONTROL_COUNT: usize = 3;

/// 光标位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentListCursor {
    Search,
    Grade,
    Year,
    /// 表格中的第 n 行
    Row(usize),
}

/// 筛选栏输入与表格选中行
#[derive(Debug, Default)]
pub struct StudentListState {
    /// 0..3 为筛选控件，之后为表格行
    position: usize,
    pub search: String,
    /// `GradeLevel::all()` 中的下标，`None` 表示全部年级
    pub grade: Option<usize>,
    /// `years` 中的下标，`None` 表示全部学年
    pub year: Option<usize>,
    /// 学年选项
    pub years: Vec<String>,
}

impl StudentListState {
    pub fn new(years: Vec<String>) -> Self {
        Self {
            years,
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> StudentListCursor {
        match self.position {
            0 => StudentListCursor::Search,
            1 => StudentListCursor::Grade,
            2 => StudentListCursor::Year,
            n => StudentListCursor::Row(n - CONTROL_COUNT),
        }
    }

    pub fn move_up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// # Arguments
    /// * `rows` - 表格当前的数据行数
    pub fn move_down(&mut self, rows: usize) {
        if self.position + 1 < CONTROL_COUNT + rows {
            self.position += 1;
        }
    }

    /// 表格内容变化后，把光标收回到仍然存在的位置
    pub fn clamp(&mut self, rows: usize) {
        self.position = self.position.min(CONTROL_COUNT + rows - 1);
    }

    /// 在当前控件上切换到上一个 / 下一个选项
    pub fn cycle(&mut self, forward: bool) {
        match self.cursor() {
            StudentListCursor::Grade => {
                self.grade = cycle_option(self.grade, GradeLevel::all().len(), forward);
            }
            StudentListCursor::Year => {
                self.year = cycle_option(self.year, self.years.len(), forward);
            }
            StudentListCursor::Search | StudentListCursor::Row(_) => {}
        }
    }

    pub fn grade_level(&self) -> Option<GradeLevel> {
        self.grade.and_then(|i| GradeLevel::all().get(i).copied())
    }

    pub fn academic_year(&self) -> Option<&str> {
        self.year.and_then(|i| self.years.get(i)).map(String::as_str)
    }

    /// 当前输入组成的筛选条件
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search.clone(),
            grade_level: self.grade_level(),
            academic_year: self.academic_year().map(str::to_string),
        }
    }

    /// 清空筛选栏，光标回到搜索框
    pub fn reset(&mut self) {
        self.position = 0;
        self.search.clear();
        self.grade = None;
        self.year = None;
    }
}

/// None → 0 → … → len-1 → None，反向同理
fn cycle_option(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, forward) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(i), true) if i + 1 < len => Some(i + 1),
        (Some(i), false) if i > 0 => Some(i - 1),
        (Some(_), _) => None,
    }
}

/// 数据中出现过的学年，去重后升序
pub fn academic_years(records: &[StudentRecord]) -> Vec<String> {
    let mut years: Vec<String> = records.iter().map(|r| r.academic_year.clone()).collect();
    years.sort();
    years.dedup();
    years
}
