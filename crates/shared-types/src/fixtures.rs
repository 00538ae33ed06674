//! Seed data for every page. All lists are built fresh on each call.

use crate::performance::PerformancePoint;
use crate::profile::{Course, StudentProfile};
use crate::roster::{RosterEntry, RosterStatus};
use crate::session::{Counselor, CounselorOption, Session, SessionStatus};

/// How soon a deadline is due, which picks its icon colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Urgent,
    Soon,
    Later,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub title: &'static str,
    pub due_in_days: u32,
    pub urgency: Urgency,
}

impl Deadline {
    pub fn due_label(&self) -> String {
        match self.due_in_days {
            1 => "Due in 1 day".to_string(),
            n => format!("Due in {n} days"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub total_students: u32,
    pub at_risk: u32,
}

/// Pictogram shown above a landing-page feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Calendar,
    Chart,
    Message,
    Users,
}

/// Landing-page feature blurb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: &'static str,
    pub format: &'static str,
    pub size_kb: u32,
}

impl Document {
    pub fn meta(&self) -> String {
        format!("{} • {} KB", self.format, self.size_kb)
    }
}

pub fn counselors() -> Vec<CounselorOption> {
    [
        ("1", "Dr. Srinivas Rao", "Computer Science"),
        ("2", "Dr. Lakshmi Menon", "Electrical Engineering"),
        ("3", "Prof. Rajesh Kumar", "Mathematics"),
        ("4", "Dr. Ananya Sharma", "Physics"),
    ]
    .into_iter()
    .map(|(id, name, department)| CounselorOption {
        id: id.into(),
        name: name.into(),
        department: department.into(),
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn session(
    id: &str,
    title: &str,
    date: &str,
    time: &str,
    duration: &str,
    counselor: (&str, &str),
    location: &str,
    status: SessionStatus,
    description: &str,
) -> Session {
    Session {
        id: id.into(),
        title: title.into(),
        date: date.into(),
        time: time.into(),
        duration: duration.into(),
        counselor: Counselor {
            name: counselor.0.into(),
            department: counselor.1.into(),
        },
        location: location.into(),
        status,
        description: description.into(),
    }
}

pub fn student_sessions() -> Vec<Session> {
    vec![
        session(
            "1",
            "Academic Performance Review",
            "May 25, 2023",
            "10:00 AM",
            "30 mins",
            ("Dr. Srinivas Rao", "Computer Science"),
            "Online Meeting",
            SessionStatus::Upcoming,
            "Review of current semester performance and discussion of improvement strategies.",
        ),
        session(
            "2",
            "Career Guidance Session",
            "May 18, 2023",
            "2:30 PM",
            "45 mins",
            ("Prof. Rajesh Kumar", "Mathematics"),
            "Faculty Office",
            SessionStatus::Completed,
            "Discussion about career paths in data science and required skill development.",
        ),
    ]
}

pub fn teacher_sessions() -> Vec<Session> {
    vec![
        session(
            "1",
            "Performance Improvement Plan",
            "May 26, 2023",
            "11:30 AM",
            "45 mins",
            ("You", "Computer Science"),
            "Your Office",
            SessionStatus::Upcoming,
            "Discussing strategies to improve academic performance with Priya Patel.",
        ),
        session(
            "2",
            "Final Year Project Review",
            "May 24, 2023",
            "2:00 PM",
            "30 mins",
            ("You", "Computer Science"),
            "Lab 3",
            SessionStatus::Upcoming,
            "Reviewing progress on the final year project with Rahul Sharma.",
        ),
    ]
}

pub fn semester_performance() -> Vec<PerformancePoint> {
    vec![
        PerformancePoint::new("Sem 1", 8.2, 9.0, 8.5),
        PerformancePoint::new("Sem 2", 8.4, 8.7, 8.8),
        PerformancePoint::new("Sem 3", 7.9, 8.2, 8.1),
        PerformancePoint::new("Sem 4", 8.6, 8.9, 9.0),
        PerformancePoint::new("Sem 5", 8.8, 9.1, 9.2),
    ]
}

pub fn class_trend() -> Vec<PerformancePoint> {
    vec![
        PerformancePoint::new("Jan", 8.2, 9.0, 8.5),
        PerformancePoint::new("Feb", 8.0, 8.5, 8.0),
        PerformancePoint::new("Mar", 7.8, 8.0, 7.5),
        PerformancePoint::new("Apr", 7.5, 7.6, 7.2),
        PerformancePoint::new("May", 7.3, 7.0, 7.0),
    ]
}

pub fn roster() -> Vec<RosterEntry> {
    [
        ("1", "Rahul Sharma", "AM.EN.U4CSE19001", "B.Tech CSE", 8.7, 92, RosterStatus::Good),
        ("2", "Priya Patel", "AM.EN.U4CSE19045", "B.Tech CSE", 7.2, 78, RosterStatus::AtRisk),
        ("3", "Arun Kumar", "AM.EN.U4ECE19023", "B.Tech ECE", 9.1, 95, RosterStatus::Excellent),
        ("4", "Sneha Reddy", "AM.EN.U4CSE19078", "B.Tech CSE", 6.8, 68, RosterStatus::Critical),
    ]
    .into_iter()
    .map(|(id, name, roll, course, cgpa, attendance, status)| RosterEntry {
        id: id.into(),
        name: name.into(),
        roll_number: roll.into(),
        course: course.into(),
        year: "4th Year".into(),
        cgpa,
        attendance,
        status,
    })
    .collect()
}

pub fn roster_stats() -> RosterStats {
    RosterStats {
        total_students: 54,
        at_risk: 8,
    }
}

pub fn student_profile() -> StudentProfile {
    let courses = [
        ("CSE401", "Database Systems", "A", "Prof. Rajesh Kumar"),
        ("CSE402", "Machine Learning", "A-", "Dr. Srinivas Rao"),
        ("CSE403", "Computer Networks", "B+", "Dr. Ananya Sharma"),
        ("CSE404", "Operating Systems", "A", "Dr. Lakshmi Menon"),
    ]
    .into_iter()
    .map(|(code, name, grade, professor)| Course {
        code: code.into(),
        name: name.into(),
        grade: grade.into(),
        professor: professor.into(),
    })
    .collect();

    StudentProfile {
        id: "AM.EN.U4CSE19001".into(),
        name: "Rahul Sharma".into(),
        email: "rahul.s@amrita.edu".into(),
        phone: "+91 9876543210".into(),
        dob: "15 May 2001".into(),
        address: "Amritapuri Campus, Kollam, Kerala".into(),
        department: "Computer Science & Engineering".into(),
        year: "4th Year".into(),
        cgpa: 8.75,
        attendance: 91,
        advisor: "Dr. Srinivas Rao".into(),
        credits_completed: 132,
        credits_required: 160,
        courses,
        achievements: vec![
            "Dean's List: Semesters 1-4".into(),
            "1st Place, Amrita Hackathon 2022".into(),
            "Technical Paper Presenter at IEEE Conference 2022".into(),
            "Member, Amrita Coding Club".into(),
        ],
    }
}

pub fn deadlines() -> Vec<Deadline> {
    vec![
        Deadline {
            title: "Database Systems Assignment",
            due_in_days: 2,
            urgency: Urgency::Urgent,
        },
        Deadline {
            title: "Machine Learning Mid-term",
            due_in_days: 5,
            urgency: Urgency::Soon,
        },
        Deadline {
            title: "Computer Networks Project",
            due_in_days: 10,
            urgency: Urgency::Later,
        },
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            name: "Grade Card (Sem 5)",
            format: "PDF",
            size_kb: 245,
        },
        Document {
            name: "Scholarship Certificate",
            format: "PDF",
            size_kb: 312,
        },
        Document {
            name: "Internship Verification",
            format: "PDF",
            size_kb: 189,
        },
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: FeatureIcon::Calendar,
            title: "Intelligent Scheduling",
            description: "AI-powered scheduling system that matches students with the right faculty based on their needs and availability.",
        },
        Feature {
            icon: FeatureIcon::Chart,
            title: "Performance Analytics",
            description: "Comprehensive dashboards displaying student performance metrics with predictive analytics to identify at-risk students.",
        },
        Feature {
            icon: FeatureIcon::Message,
            title: "Real-time Communication",
            description: "Secure messaging system allowing students to communicate with counselors before and after sessions.",
        },
        Feature {
            icon: FeatureIcon::Users,
            title: "Role-based Access",
            description: "Tailored experiences for students, teachers and administrators with appropriate access controls.",
        },
    ]
}
