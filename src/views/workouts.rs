use crate::models::{Workout, WorkoutParams};
use crate::services::workout_service::PER_PAGE;

use super::{escape_html, render_layout};

/// Show-page titles carry at most this many characters of the name.
const TITLE_NAME_LEN: usize = 13;

pub fn index_page(workouts: &[Workout], page: i64, total: i64) -> String {
    let mut body = String::from("<section>\n");
    for workout in workouts {
        body.push_str(&format!(
            "<h3 class=\"workout_name\"><a href=\"/workouts/{}\">{}</a></h3>\n",
            workout.id,
            escape_html(&workout.name)
        ));
    }
    body.push_str("</section>\n");

    body.push_str("<nav class=\"pagination\">");
    if page > 1 {
        body.push_str(&format!(
            "<a href=\"/?page={}\">Previous page</a>",
            page - 1
        ));
    }
    if page * PER_PAGE < total {
        body.push_str(&format!("<a href=\"/?page={}\">Next page</a>", page + 1));
    }
    body.push_str("</nav>\n");

    body.push_str("<a href=\"/workouts/new\">New Workout</a>\n");

    render_layout("Index", &body)
}

pub fn new_page(params: &WorkoutParams, errors: &[String]) -> String {
    let mut body = String::new();
    body.push_str(&flash_errors(errors));
    body.push_str(&workout_form("/workouts", None, params));
    render_layout("New Workout", &body)
}

/// Detail page. `form` carries the field values to echo in the edit form,
/// which differ from the stored record after a rejected update.
pub fn show_page(workout: &Workout, form: &WorkoutParams, errors: &[String]) -> String {
    let title: String = workout.name.chars().take(TITLE_NAME_LEN).collect();

    let mut body = String::from("<ul class=\"workout_info\">\n");
    body.push_str(&format!("<li>{}</li>\n", escape_html(&workout.name)));
    body.push_str(&format!("<li>{}</li>\n", workout.date.format("%Y-%m-%d")));
    if let Some(note) = &workout.note {
        body.push_str(&format!("<li>{}</li>\n", escape_html(note)));
    }
    body.push_str("</ul>\n");

    body.push_str(&flash_errors(errors));
    body.push_str(&workout_form(
        &format!("/workouts/{}", workout.id),
        Some("patch"),
        form,
    ));
    body.push_str(&format!(
        "<a data-method=\"delete\" href=\"/workouts/{}\">Delete workout</a>\n",
        workout.id
    ));

    render_layout(&escape_html(&title), &body)
}

fn flash_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut block = String::from("<div class=\"flash_error\">\n<ul>\n");
    for error in errors {
        block.push_str(&format!("<li>{}</li>\n", escape_html(error)));
    }
    block.push_str("</ul>\n</div>\n");
    block
}

fn workout_form(action: &str, method_override: Option<&str>, params: &WorkoutParams) -> String {
    let mut form = format!("<form action=\"{}\" method=\"post\">\n", action);
    if let Some(method) = method_override {
        form.push_str(&format!(
            "<input type=\"hidden\" name=\"_method\" value=\"{}\">\n",
            method
        ));
    }

    form.push_str(&format!(
        "<label for=\"workout_name\">Name</label>\n\
         <input type=\"text\" id=\"workout_name\" name=\"name\" value=\"{}\">\n",
        escape_html(params.name.as_deref().unwrap_or(""))
    ));
    form.push_str(&format!(
        "<label for=\"workout_date\">Date</label>\n\
         <input type=\"date\" id=\"workout_date\" name=\"date\" value=\"{}\">\n",
        escape_html(params.date.as_deref().unwrap_or(""))
    ));
    form.push_str(&format!(
        "<label for=\"workout_note\">Note</label>\n\
         <textarea id=\"workout_note\" name=\"note\">{}</textarea>\n",
        escape_html(params.note.as_deref().unwrap_or(""))
    ));
    form.push_str("<input type=\"submit\" value=\"Save\">\n</form>\n");
    form
}
