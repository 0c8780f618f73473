pub(crate) mod accounts;
pub(crate) mod bookings;
pub(crate) mod catalog;
pub(crate) mod fixture;
pub(crate) mod password;
pub(crate) mod storage;
pub(crate) mod teams;
