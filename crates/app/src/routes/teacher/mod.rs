mod dashboard;

pub use dashboard::TeacherDashboard;
