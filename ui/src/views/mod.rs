mod dashboard;
pub use dashboard::Dashboard;

pub use skill_test::SkillTest;

mod internship;
pub use internship::Internship;
