//! View functions: `&Model` in, declarative tree out.

use crate::model::Model;
use crate::types::Party;

use super::node::{Action, Element, Node};

/// Shown in the details section while nothing is selected
pub const NO_SELECTION_PROMPT: &str = "Please select a party to know more.";

/// One entry of the event list; marked `selected` when it is the selected event.
pub fn event_list_item(model: &Model, party: &Party) -> Node {
    let item = Element::new("li");
    let item = if model.is_selected(party) {
        item.class("selected")
    } else {
        item
    };

    item.child(
        Element::new("a")
            .attr("href", "#selected")
            .text(party.name.as_str())
            .on(Action::SelectEvent { id: party.id }),
    )
    .into()
}

/// All events, in stored order
pub fn event_list(model: &Model) -> Node {
    Element::new("ul")
        .children(model.events.iter().map(|party| event_list_item(model, party)))
        .into()
}

fn labelled_input(label: &str, input: Element) -> Node {
    Element::new("label").text(label).child(input.flag("required")).into()
}

/// Form capturing a new event; the date picker value is normalized on submit
pub fn new_event_form() -> Node {
    Element::new("form")
        .class("eventForm")
        .on(Action::CreateEvent)
        .child(labelled_input("Name", Element::new("input").attr("name", "name")))
        .child(labelled_input(
            "Description",
            Element::new("input").attr("name", "description"),
        ))
        .child(labelled_input(
            "Date",
            Element::new("input").attr("name", "date").attr("type", "date"),
        ))
        .child(labelled_input(
            "Location",
            Element::new("input").attr("name", "location"),
        ))
        .child(Element::new("button").text("Create Event"))
        .into()
}

/// Guests with an RSVP for `party`
pub fn guest_list(model: &Model, party: &Party) -> Node {
    Element::new("ul")
        .children(
            model
                .event_guests(party)
                .into_iter()
                .map(|guest| Element::new("li").text(guest.name.as_str()).into()),
        )
        .into()
}

/// Detail panel of the selected event, or a prompt when nothing is selected
pub fn event_details(model: &Model) -> Node {
    let Some(party) = &model.selected_event else {
        return Element::new("p").text(NO_SELECTION_PROMPT).into();
    };

    Element::new("section")
        .class("event")
        .child(Element::new("h3").text(format!("{} #{}", party.name, party.id)))
        .child(
            Element::new("time")
                .attr("datetime", party.date.as_str())
                .text(party.calendar_date()),
        )
        .child(Element::new("address").text(party.location.as_str()))
        .child(Element::new("p").text(party.description.as_str()))
        .child(guest_list(model, party))
        .child(
            Element::new("button")
                .text("Remove Event")
                .on(Action::RemoveEvent { id: party.id }),
        )
        .into()
}

/// The whole application tree, rebuilt from scratch on every call
pub fn app(model: &Model) -> Node {
    Element::new("div")
        .attr("id", "app")
        .child(Element::new("h1").text("Party Planner"))
        .child(
            Element::new("main")
                .child(
                    Element::new("section")
                        .class("upcoming")
                        .child(Element::new("h2").text("Upcoming Parties"))
                        .child(event_list(model))
                        .child(Element::new("h3").text("Create a new event"))
                        .child(new_event_form()),
                )
                .child(
                    Element::new("section")
                        .class("details")
                        .attr("id", "selected")
                        .child(Element::new("h2").text("Party Details"))
                        .child(event_details(model)),
                ),
        )
        .into()
}
