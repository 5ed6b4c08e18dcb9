pub mod reservation;
pub mod user;

pub use reservation::ReservationDao;
pub use user::UserDao;
