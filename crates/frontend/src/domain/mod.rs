pub mod a001_team_member;
pub mod a002_task;
pub mod a003_project;
pub mod a005_message;
pub mod a006_calendar_event;
pub mod a007_user_profile;
