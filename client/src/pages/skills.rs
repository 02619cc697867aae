//! Skills library: templates plus the variables they interpolate.

use leptos::prelude::*;

use crate::components::template_list::TemplateList;
use crate::components::variables_panel::VariablesPanel;
use crate::layouts::SkillsLayout;

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <SkillsLayout>
            <div class="page page--skills">
                <TemplateList/>
                <VariablesPanel/>
            </div>
        </SkillsLayout>
    }
}
