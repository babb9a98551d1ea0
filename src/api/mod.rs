//! Wire contract of the shortener service's REST API.
//!
//! # Endpoints
//!
//! | Operation | Method | Path                    |
//! |-----------|--------|-------------------------|
//! | List      | GET    | `/api/urls`             |
//! | Create    | POST   | `/api/add-url`          |
//! | Update    | PUT    | `/api/url/{short_code}` |
//! | Delete    | DELETE | `/api/url/{short_code}` |
//! | Stats     | GET    | `/api/stats/{short_code}` |
//! | Login     | POST   | `/api/login`            |
//! | Register  | POST   | `/api/register`         |

pub mod dto;
