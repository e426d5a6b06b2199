use crate::api::{ApiClient, ApiError, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PatrolStats {
    pub recorded: usize,
    pub unpaid: usize,
    pub collected_amount: f64,
}

pub async fn fetch_violations(api: &ApiClient) -> Result<Vec<Violation>, ApiError> {
    api.list_violations().await
}

pub fn build_stats(violations: &[Violation]) -> PatrolStats {
    let paid: Vec<&Violation> = violations.iter().filter(|v| v.paid).collect();
    PatrolStats {
        recorded: violations.len(),
        unpaid: violations.len() - paid.len(),
        collected_amount: paid.iter().map(|v| v.fine_amount).sum(),
    }
}

/// Most recent entries first. The backend returns violations in insertion
/// order, so the newest records sit at the end of the list.
pub fn recent_entries(violations: &[Violation], limit: usize) -> Vec<Violation> {
    violations.iter().rev().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(id: &str, paid: bool, fine: f64) -> Violation {
        Violation {
            id: id.into(),
            license_plate: "01234-116-16".into(),
            violation_type: "speeding".into(),
            location: "RN5, Alger".into(),
            violation_date: "2025-03-14T09:30".into(),
            fine_amount: fine,
            paid,
            payment_date: None,
            insurance_policy: None,
            notes: None,
            officer_id: Some("u1".into()),
        }
    }

    #[test]
    fn stats_count_unpaid_and_sum_collected() {
        let all = vec![
            violation("v1", false, 5000.0),
            violation("v2", true, 3000.0),
            violation("v3", true, 2000.0),
        ];
        let stats = build_stats(&all);
        assert_eq!(stats.recorded, 3);
        assert_eq!(stats.unpaid, 1);
        assert_eq!(stats.collected_amount, 5000.0);
    }

    #[test]
    fn recent_entries_return_newest_first_and_respect_limit() {
        let all = vec![
            violation("v1", false, 5000.0),
            violation("v2", false, 3000.0),
            violation("v3", false, 2000.0),
        ];
        let recent = recent_entries(&all, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "v3");
        assert_eq!(recent[1].id, "v2");
    }

    #[test]
    fn recent_entries_handle_short_lists() {
        let all = vec![violation("v1", false, 5000.0)];
        assert_eq!(recent_entries(&all, 5).len(), 1);
        assert!(recent_entries(&[], 5).is_empty());
    }
}
