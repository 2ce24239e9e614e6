// src/console/dashboard_tabs.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Departments,
    Trainings,
}

/// 研修タブ内のサブタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainingSection {
    #[default]
    Schedule,
    TrainingPlan,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [Self::Overview, Self::Departments, Self::Trainings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Departments => "departments",
            Self::Trainings => "trainings",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl TrainingSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schedule => "trainings",
            Self::TrainingPlan => "training-plan",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardTabs {
    active: DashboardTab,
    training_section: TrainingSection,
}

impl DashboardTabs {
    pub fn active(&self) -> DashboardTab {
        self.active
    }

    pub fn training_section(&self) -> TrainingSection {
        self.training_section
    }

    pub fn select(&mut self, tab: DashboardTab) {
        self.active = tab;
    }

    /// サブタブを選ぶと研修タブに移る
    pub fn select_training_section(&mut self, section: TrainingSection) {
        self.active = DashboardTab::Trainings;
        self.training_section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs() {
        let mut tabs = DashboardTabs::default();
        assert_eq!(tabs.active(), DashboardTab::Overview);

        tabs.select(DashboardTab::Departments);
        assert_eq!(tabs.active(), DashboardTab::Departments);

        tabs.select_training_section(TrainingSection::TrainingPlan);
        assert_eq!(tabs.active(), DashboardTab::Trainings);
        assert_eq!(tabs.training_section().as_str(), "training-plan");

        assert_eq!(DashboardTab::from_str("departments"), Some(DashboardTab::Departments));
        assert_eq!(DashboardTab::from_str("meetings"), None);
    }
}
