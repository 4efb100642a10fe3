pub mod m202608200001_create_users;
pub mod m202608200002_create_cohorts;
pub mod m202608200003_create_students;
