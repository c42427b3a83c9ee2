use maud::{Markup, Render, html};

pub fn render_table<const N: usize>(
    overall_title: &'static str,
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (title(overall_title))
            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            @for title in titles {
                                th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                            }
                        }
                    }
                    tbody {
                        @for row in items {
                            tr {
                                @for col in row {
                                    td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn render_nav() -> Markup {
    html! {
        nav class="w-full bg-gray-800 shadow-md mb-8" {
            div class="container mx-auto flex flex-row items-center justify-between py-4 px-4" {
                a href="/students/" class="text-xl font-bold" {"Rollcall"}
                div class="flex flex-row space-x-4" {
                    a href="/students/" class="hover:text-gray-300" {"Students"}
                    a href="/create/" class="hover:text-gray-300" {"Add Student"}
                }
            }
        }
    }
}

pub fn form_element(id: &'static str, label: &'static str, inner: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-gray-300 text-sm font-bold mb-2" {(label)}
            (inner)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    input_type: Option<&'static str>,
    value: Option<&str>,
) -> Markup {
    form_element(id, label, html! {
        input type=(input_type.unwrap_or("text")) name=(id) id=(id) value=[value] required[required] class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
    })
}

pub fn form_submit_button(text: Option<&'static str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text.unwrap_or("Submit"))
            }
        }
    }
}
