//! UI Components
//!
//! Leptos views over the civic-core engines. Components keep no business
//! rules of their own; every gesture becomes an intent sent through the context.

mod char_counter;
mod collection_toolbar;
mod comments_section;
mod delete_confirm_button;
mod form_actions;
mod form_field;
mod pagination;
mod search_box;
mod step_indicator;
mod tag_list_input;

mod collaboration_form;
mod microcredit_card;
mod microcredit_form;
mod microcredit_list;
mod participation_form;
mod project_form;
mod projects_list;
mod proposal_form;
mod proposals_list;
mod sms_validator;
mod stats_panel;
mod team_card;
mod verification_steps;
mod voting_widget;

pub use char_counter::CharCounterView;
pub use collection_toolbar::{CollectionToolbar, SelectOption};
pub use comments_section::CommentsSection;
pub use delete_confirm_button::DeleteConfirmButton;
pub use form_actions::FormActions;
pub use form_field::{FieldBinding, FormInput, FormSelect, FormTextArea, InputKind};
pub use pagination::PaginationBar;
pub use search_box::SearchBox;
pub use step_indicator::StepIndicator;
pub use tag_list_input::TagListInput;

pub use collaboration_form::CollaborationFormView;
pub use microcredit_card::MicrocreditCard;
pub use microcredit_form::MicrocreditFormView;
pub use microcredit_list::MicrocreditList;
pub use participation_form::ParticipationFormView;
pub use project_form::ProjectFormView;
pub use projects_list::ProjectsList;
pub use proposal_form::ProposalFormView;
pub use proposals_list::ProposalsList;
pub use sms_validator::SmsValidatorView;
pub use stats_panel::{CollaborationStatsView, MicrocreditStatsView};
pub use team_card::{TeamCardView, TeamsGrid};
pub use verification_steps::VerificationSteps;
pub use voting_widget::VotingWidgetView;
