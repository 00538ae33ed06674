#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_flow_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod booking_flow_tests;

#[cfg(test)]
mod session_list_tests;

#[cfg(test)]
mod profile_edit_tests;

#[cfg(test)]
mod roster_search_tests;
