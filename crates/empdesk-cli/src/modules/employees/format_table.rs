use empdesk_core::EmployeeResponse;

pub(crate) fn print_employee_table(employees: &[EmployeeResponse]) {
    let mut rows = Vec::new();
    let mut id_width = "ID".len();
    let mut name_width = "NAME".len();
    let mut email_width = "EMAIL".len();
    let mut department_width = "DEPARTMENT".len();

    for employee in employees {
        let id = employee.id.to_string();
        let name = employee.full_name();
        let department = employee.department.clone().unwrap_or_default();
        let position = employee.position.clone().unwrap_or_default();
        id_width = id_width.max(id.len());
        name_width = name_width.max(name.chars().count());
        email_width = email_width.max(employee.email.chars().count());
        department_width = department_width.max(department.chars().count());
        rows.push((id, name, employee.email.as_str(), department, position));
    }

    println!(
        "{:<id_width$}  {:<name_width$}  {:<email_width$}  {:<department_width$}  POSITION",
        "ID", "NAME", "EMAIL", "DEPARTMENT"
    );
    for (id, name, email, department, position) in rows {
        println!(
            "{:<id_width$}  {:<name_width$}  {:<email_width$}  {:<department_width$}  {}",
            id, name, email, department, position
        );
    }
}
