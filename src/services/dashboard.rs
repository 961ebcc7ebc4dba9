// Dashboard: metrics grid, monthly overview, recent projects, activity feed
// and upcoming deadlines.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::queries::sort::by_date_asc;
use crate::queries::Dated;
use crate::services::projects::ProjectCard;
use crate::services::Avatar;
use crate::types::{
    Activity, ActivityType, Config, Metric, MetricValue, MonthlyProjectCount, Project,
    ProjectStatus, Trend,
};
use crate::util::format_short_date;

/// How many records each dashboard panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub recent_projects: usize,
    pub deadlines: usize,
}

impl From<&Config> for DashboardLimits {
    fn from(config: &Config) -> Self {
        DashboardLimits {
            recent_projects: config.recent_project_limit,
            deadlines: config.deadline_limit,
        }
    }
}

impl Default for DashboardLimits {
    fn default() -> Self {
        DashboardLimits::from(&Config::default())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: String,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    /// "12%"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_label: Option<String>,
}

impl From<&Metric> for MetricCard {
    fn from(metric: &Metric) -> Self {
        MetricCard {
            title: metric.title.clone(),
            value: metric.value.clone(),
            trend: metric.trend.clone(),
            trend_label: metric.trend.as_ref().map(|t| format!("{}%", t.value)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub user: Avatar,
    pub action: String,
    pub target: String,
    pub time: String,
    pub is_new: bool,
}

impl From<&Activity> for ActivityItem {
    fn from(activity: &Activity) -> Self {
        ActivityItem {
            id: activity.id.clone(),
            activity_type: activity.activity_type,
            user: Avatar::from(&activity.user),
            action: activity.action.clone(),
            target: activity.target.clone(),
            time: activity.time.clone(),
            is_new: activity.is_new,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeed {
    pub items: Vec<ActivityItem>,
    pub new_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    pub id: String,
    pub title: String,
    pub client: String,
    pub due_date: NaiveDate,
    /// "Due Jul 15, 2023"
    pub due_label: String,
    pub progress: u8,
    pub is_overdue: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub today: NaiveDate,
    pub metrics: Vec<MetricCard>,
    pub project_trend: Vec<MonthlyProjectCount>,
    pub recent_projects: Vec<ProjectCard>,
    pub activity: ActivityFeed,
    pub deadlines: Vec<Deadline>,
}

pub fn activity_feed(activities: &[Activity]) -> ActivityFeed {
    ActivityFeed {
        new_count: activities.iter().filter(|a| a.is_new).count(),
        items: activities.iter().map(ActivityItem::from).collect(),
    }
}

/// Open projects by due date, soonest first. A project is overdue once `now`
/// has passed the start of its due day.
pub fn upcoming_deadlines(projects: &[Project], now: NaiveDateTime, limit: usize) -> Vec<Deadline> {
    let mut open: Vec<&Project> = projects
        .iter()
        .filter(|p| p.status != ProjectStatus::Completed)
        .collect();
    open.sort_by(|a, b| by_date_asc(a, b));

    open.into_iter()
        .take(limit)
        .map(|p| Deadline {
            id: p.id.clone(),
            title: p.title.clone(),
            client: p.client.clone(),
            due_date: p.due_date,
            due_label: format!("Due {}", format_short_date(p.due_date)),
            progress: p.progress,
            is_overdue: p.instant() < now,
        })
        .collect()
}

pub fn build_dashboard(catalog: &Catalog, now: NaiveDateTime, limits: DashboardLimits) -> DashboardPage {
    let deadlines = upcoming_deadlines(&catalog.projects, now, limits.deadlines);
    let overdue = deadlines.iter().filter(|d| d.is_overdue).count();
    log::debug!(
        "dashboard: now={} deadlines={} overdue={}",
        now,
        deadlines.len(),
        overdue
    );

    DashboardPage {
        today: now.date(),
        metrics: catalog.metrics.iter().map(MetricCard::from).collect(),
        project_trend: catalog.project_trend.clone(),
        recent_projects: catalog
            .projects
            .iter()
            .take(limits.recent_projects)
            .map(ProjectCard::from)
            .collect(),
        activity: activity_feed(&catalog.activities),
        deadlines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::{sample_activities, sample_catalog, sample_projects};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    fn at(m: u32, d: u32, h: u32) -> NaiveDateTime {
        day(m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_deadlines_skip_completed_and_sort_ascending() {
        let projects = sample_projects();
        let deadlines = upcoming_deadlines(&projects, at(7, 10, 8), 3);
        let titles: Vec<&str> = deadlines.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Exterior Painting", "Kitchen Renovation", "Deck Installation"]
        );
        assert!(deadlines[0].is_overdue);
        assert!(!deadlines[1].is_overdue);
        assert_eq!(deadlines[1].due_label, "Due Jul 15, 2023");
    }

    #[test]
    fn test_due_today_turns_overdue_after_midnight() {
        let projects = sample_projects();
        let kitchen = |now| {
            upcoming_deadlines(&projects, now, 5)
                .into_iter()
                .find(|d| d.title == "Kitchen Renovation")
                .unwrap()
        };
        assert!(!kitchen(day(7, 15).and_hms_opt(0, 0, 0).unwrap()).is_overdue);
        assert!(kitchen(at(7, 15, 9)).is_overdue);
        assert!(!kitchen(at(7, 14, 23)).is_overdue);

        let deadlines = upcoming_deadlines(&projects, at(7, 15, 9), 5);
        assert_eq!(deadlines.len(), 5);
        assert!(deadlines.windows(2).all(|w| w[0].due_date <= w[1].due_date));
    }

    #[test]
    fn test_activity_feed_counts_new() {
        let feed = activity_feed(&sample_activities());
        assert_eq!(feed.items.len(), 5);
        assert_eq!(feed.new_count, 2);
        assert_eq!(feed.items[0].user.initials, "AS");
        assert_eq!(feed.items[4].user.image, None);
    }

    #[test]
    fn test_build_dashboard() {
        let today = day(7, 10);
        let page = build_dashboard(&sample_catalog(today), at(7, 10, 8), DashboardLimits::default());
        assert_eq!(page.today, today);
        assert_eq!(page.metrics.len(), 4);
        assert_eq!(page.metrics[0].trend_label.as_deref(), Some("12%"));
        assert_eq!(page.project_trend.len(), 6);
        assert_eq!(page.recent_projects.len(), 3);
        assert_eq!(page.recent_projects[0].title, "Kitchen Renovation");
        assert_eq!(page.deadlines.len(), 3);
    }

    #[test]
    fn test_limits_come_from_config() {
        let config = Config {
            recent_project_limit: 1,
            deadline_limit: 0,
            ..Config::default()
        };
        let today = day(7, 10);
        let page = build_dashboard(&sample_catalog(today), at(7, 10, 8), DashboardLimits::from(&config));
        assert_eq!(page.recent_projects.len(), 1);
        assert!(page.deadlines.is_empty());
    }
}
