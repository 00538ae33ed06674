/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Info,
}

/// Sidebar shortcuts on both dashboards. None of them navigates anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    AcademicCalendar,
    CourseMaterials,
    AssignmentTracker,
    DetailedAnalytics,
    ScheduleGroupSession,
    FlagStudentConcerns,
    GenerateReports,
}

pub const STUDENT_QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction::AcademicCalendar,
    QuickAction::CourseMaterials,
    QuickAction::AssignmentTracker,
    QuickAction::DetailedAnalytics,
];

pub const TEACHER_QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction::ScheduleGroupSession,
    QuickAction::FlagStudentConcerns,
    QuickAction::GenerateReports,
];

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AcademicCalendar => "View Academic Calendar",
            QuickAction::CourseMaterials => "Course Materials",
            QuickAction::AssignmentTracker => "Assignment Tracker",
            QuickAction::DetailedAnalytics => "Detailed Analytics",
            QuickAction::ScheduleGroupSession => "Schedule Group Session",
            QuickAction::FlagStudentConcerns => "Flag Student Concerns",
            QuickAction::GenerateReports => "Generate Reports",
        }
    }
}

/// Feedback raised by user actions that have no backing effect beyond local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SessionBooked,
    SessionCancelled,
    RescheduleRequested,
    MessageRequested,
    SessionDetailsRequested,
    ProfileUpdated,
    DocumentRequested(String),
    StudentProfileRequested(String),
    AllSessionsRequested,
    AllDeadlinesRequested,
    QuickAction(QuickAction),
}

impl Notice {
    pub fn title(&self) -> String {
        match self {
            Notice::SessionBooked => "Session Booked".into(),
            Notice::SessionCancelled => "Session Cancelled".into(),
            Notice::RescheduleRequested => "Reschedule Requested".into(),
            Notice::MessageRequested => "Message Counselor".into(),
            Notice::SessionDetailsRequested => "Session Details".into(),
            Notice::ProfileUpdated => "Profile Updated".into(),
            Notice::DocumentRequested(name) => name.clone(),
            Notice::StudentProfileRequested(name) => name.clone(),
            Notice::AllSessionsRequested => "All Sessions".into(),
            Notice::AllDeadlinesRequested => "All Deadlines".into(),
            Notice::QuickAction(action) => action.label().into(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::SessionBooked => "Your counseling session has been scheduled.",
            Notice::SessionCancelled => "The session has been marked as cancelled.",
            Notice::RescheduleRequested => "Your counselor will propose a new time.",
            Notice::MessageRequested => "Messaging will open in a future release.",
            Notice::SessionDetailsRequested => "Full session details are not available yet.",
            Notice::ProfileUpdated => "Your profile information has been updated successfully.",
            Notice::DocumentRequested(_) => "Document downloads are not available yet.",
            Notice::StudentProfileRequested(_) => "Student profiles open in a future release.",
            Notice::AllSessionsRequested => "The full session history is not available yet.",
            Notice::AllDeadlinesRequested => "The full deadline list is not available yet.",
            Notice::QuickAction(_) => "This section is coming soon.",
        }
    }

    pub fn tone(&self) -> NoticeTone {
        match self {
            Notice::SessionBooked | Notice::SessionCancelled | Notice::ProfileUpdated => {
                NoticeTone::Success
            }
            Notice::RescheduleRequested
            | Notice::MessageRequested
            | Notice::SessionDetailsRequested
            | Notice::DocumentRequested(_)
            | Notice::StudentProfileRequested(_)
            | Notice::AllSessionsRequested
            | Notice::AllDeadlinesRequested
            | Notice::QuickAction(_) => NoticeTone::Info,
        }
    }
}
