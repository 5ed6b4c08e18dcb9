use crate::error::RepoError;
use chrono::NaiveDate;

/// A reservation that has passed form validation and is ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: i32,
}

impl NewReservation {
    /// Checks shared by every repository before anything is stored.
    pub fn check(&self) -> Result<(), RepoError> {
        if self.end_date < self.start_date {
            return Err(RepoError::InvalidReservation(
                "Departure date must not be before arrival date".to_string(),
            ));
        }
        if self.room_id <= 0 {
            return Err(RepoError::InvalidReservation(format!(
                "Unknown room {}",
                self.room_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_reservation;

    #[test]
    fn test_check_accepts_sample() {
        assert!(sample_reservation().check().is_ok());
    }

    #[test]
    fn test_check_same_day_stay() {
        let mut res = sample_reservation();
        res.end_date = res.start_date;
        assert!(res.check().is_ok());
    }

    #[test]
    fn test_check_rejects_reversed_dates() {
        let mut res = sample_reservation();
        std::mem::swap(&mut res.start_date, &mut res.end_date);
        assert!(matches!(res.check(), Err(RepoError::InvalidReservation(_))));
    }

    #[test]
    fn test_check_rejects_unknown_room() {
        let mut res = sample_reservation();
        res.room_id = 0;
        assert_eq!(
            res.check(),
            Err(RepoError::InvalidReservation("Unknown room 0".to_string()))
        );
    }
}
