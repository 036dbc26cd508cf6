//! # Domain Entities Module
//!
//! 백엔드 REST API가 주고받는 레코드들을 정의합니다.
//! 모든 엔티티는 평평한(flat) 구조이며, 필수 필드 존재 외의 불변식은
//! 백엔드가 책임집니다.
//!
//! | 엔티티 | 식별자 | 필드 |
//! |--------|--------|------|
//! | [`User`] | `email` | name, surname, phone, cname |
//! | [`Doctor`] | `email` | degree, salary |
//! | [`Country`] | `cname` | population |

pub mod country;
pub mod doctor;
pub mod user;

pub use country::Country;
pub use doctor::Doctor;
pub use user::User;
