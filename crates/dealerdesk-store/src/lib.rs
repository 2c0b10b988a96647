//! In-memory record store for cars, customers, employees, and sales
//!
//! Collections preserve insertion order, which doubles as the default
//! display order. Ids are assigned from per-collection counters that only
//! ever move forward, so deleting a record and adding a new one can never
//! reuse an id. Removal does not cascade: sales keep whatever ids they were
//! created with and joins resolve missing records to "Unknown".

pub mod sample;

use chrono::NaiveDate;

use dealerdesk_domain::model::{Car, CarStatus, Customer, Employee, PaymentMethod, Sale};
use dealerdesk_domain::repository::{
    CarRepository, CustomerRepository, EmployeeRepository, SaleRepository,
};
use dealerdesk_types::{Error, Result};

/// The single mutable holder of all dealership records.
///
/// Constructed once at startup and handed to whichever presentation layer
/// is running; all operations are synchronous and single-threaded.
#[derive(Debug, Default)]
pub struct DealershipStore {
    cars: Vec<Car>,
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    sales: Vec<Sale>,
    next_car_id: u32,
    next_customer_id: u32,
    next_employee_id: u32,
    next_sale_id: u32,
}

impl DealershipStore {
    pub fn new() -> Self {
        Self {
            next_car_id: 1,
            next_customer_id: 1,
            next_employee_id: 1,
            next_sale_id: 1,
            ..Default::default()
        }
    }

    /// A store pre-loaded with the demo records
    pub fn with_sample_data() -> Result<Self> {
        let mut store = Self::new();
        sample::load_sample_data(&mut store)?;
        Ok(store)
    }

    // Cars

    /// Append a car. The id field of the passed record is overwritten with
    /// the assigned id, which is returned.
    pub fn add_car(&mut self, mut car: Car) -> u32 {
        car.id = self.next_car_id;
        self.next_car_id += 1;
        let id = car.id;
        self.cars.push(car);
        id
    }

    /// Replace an existing car's mutable fields, matched by `car.id`
    pub fn update_car(&mut self, car: Car) -> Result<()> {
        let slot = self
            .cars
            .iter_mut()
            .find(|c| c.id == car.id)
            .ok_or(Error::NotFound {
                entity: "car",
                id: car.id,
            })?;
        *slot = car;
        Ok(())
    }

    pub fn remove_car(&mut self, id: u32) -> Result<()> {
        let index = self
            .cars
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::NotFound { entity: "car", id })?;
        self.cars.remove(index);
        Ok(())
    }

    pub fn car(&self, id: u32) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    // Customers

    pub fn add_customer(&mut self, mut customer: Customer) -> u32 {
        customer.id = self.next_customer_id;
        self.next_customer_id += 1;
        let id = customer.id;
        self.customers.push(customer);
        id
    }

    pub fn update_customer(&mut self, customer: Customer) -> Result<()> {
        let slot = self
            .customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or(Error::NotFound {
                entity: "customer",
                id: customer.id,
            })?;
        *slot = customer;
        Ok(())
    }

    pub fn remove_customer(&mut self, id: u32) -> Result<()> {
        let index = self
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::NotFound {
                entity: "customer",
                id,
            })?;
        self.customers.remove(index);
        Ok(())
    }

    pub fn customer(&self, id: u32) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    // Employees

    pub fn add_employee(&mut self, mut employee: Employee) -> u32 {
        employee.id = self.next_employee_id;
        self.next_employee_id += 1;
        let id = employee.id;
        self.employees.push(employee);
        id
    }

    pub fn update_employee(&mut self, employee: Employee) -> Result<()> {
        let slot = self
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(Error::NotFound {
                entity: "employee",
                id: employee.id,
            })?;
        *slot = employee;
        Ok(())
    }

    pub fn remove_employee(&mut self, id: u32) -> Result<()> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NotFound {
                entity: "employee",
                id,
            })?;
        self.employees.remove(index);
        Ok(())
    }

    pub fn employee(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    // Sales

    /// Record a sale of an available car. The car must exist and be
    /// `Available`; on success its status flips to `Sold`.
    pub fn record_sale(
        &mut self,
        date: NaiveDate,
        customer_id: u32,
        car_id: u32,
        price: f64,
        employee_id: u32,
        payment_method: PaymentMethod,
    ) -> Result<u32> {
        let car = self
            .cars
            .iter_mut()
            .find(|c| c.id == car_id)
            .ok_or(Error::NotFound {
                entity: "car",
                id: car_id,
            })?;
        if car.status != CarStatus::Available {
            return Err(Error::CarUnavailable {
                id: car_id,
                status: car.status.label().to_string(),
            });
        }
        car.status = CarStatus::Sold;

        let id = self.next_sale_id;
        self.next_sale_id += 1;
        self.sales.push(Sale {
            id,
            date,
            customer_id,
            car_id,
            price,
            employee_id,
            payment_method,
        });
        Ok(id)
    }

    pub fn sale(&self, id: u32) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }
}

impl CarRepository for DealershipStore {
    fn add(&mut self, car: Car) -> u32 {
        self.add_car(car)
    }

    fn remove(&mut self, id: u32) -> Result<()> {
        self.remove_car(id)
    }

    fn find_by_id(&self, id: u32) -> Option<&Car> {
        self.car(id)
    }

    fn find_all(&self) -> &[Car] {
        self.cars()
    }
}

impl CustomerRepository for DealershipStore {
    fn add(&mut self, customer: Customer) -> u32 {
        self.add_customer(customer)
    }

    fn remove(&mut self, id: u32) -> Result<()> {
        self.remove_customer(id)
    }

    fn find_by_id(&self, id: u32) -> Option<&Customer> {
        self.customer(id)
    }

    fn find_all(&self) -> &[Customer] {
        self.customers()
    }
}

impl EmployeeRepository for DealershipStore {
    fn add(&mut self, employee: Employee) -> u32 {
        self.add_employee(employee)
    }

    fn remove(&mut self, id: u32) -> Result<()> {
        self.remove_employee(id)
    }

    fn find_by_id(&self, id: u32) -> Option<&Employee> {
        self.employee(id)
    }

    fn find_all(&self) -> &[Employee] {
        self.employees()
    }
}

impl SaleRepository for DealershipStore {
    fn find_by_id(&self, id: u32) -> Option<&Sale> {
        self.sale(id)
    }

    fn find_all(&self) -> &[Sale] {
        self.sales()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_car(make: &str, model: &str) -> Car {
        Car {
            id: 0,
            make: make.to_string(),
            model: model.to_string(),
            year: 2022,
            color: "Silver".to_string(),
            price: 25000.0,
            status: CarStatus::Available,
            mileage: 15000,
            vin: "VIN00001".to_string(),
        }
    }

    fn test_customer(name: &str) -> Customer {
        Customer {
            id: 0,
            name: name.to_string(),
            phone: "555-0101".to_string(),
            email: "a@example.com".to_string(),
            address: "123 Main St".to_string(),
            driver_license: "DL1".to_string(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_then_find_by_id() {
        let mut store = DealershipStore::new();
        let id = store.add_car(test_car("Toyota", "Camry"));
        assert_eq!(id, 1);
        assert_eq!(store.cars().len(), 1);
        let found = store.car(id).unwrap();
        assert_eq!(found.make, "Toyota");
        assert_eq!(found.model, "Camry");
    }

    #[test]
    fn test_remove_then_find_reports_not_found() {
        let mut store = DealershipStore::new();
        let id = store.add_car(test_car("Toyota", "Camry"));
        store.remove_car(id).unwrap();
        assert!(store.cars().is_empty());
        assert!(store.car(id).is_none());
        assert!(matches!(
            store.remove_car(id),
            Err(Error::NotFound { entity: "car", .. })
        ));
    }

    #[test]
    fn test_ids_stay_monotonic_across_deletes() {
        let mut store = DealershipStore::new();
        store.add_car(test_car("Toyota", "Camry"));
        let second = store.add_car(test_car("Honda", "Accord"));
        store.add_car(test_car("Ford", "Mustang"));

        store.remove_car(second).unwrap();
        let fourth = store.add_car(test_car("Tesla", "Model 3"));

        // The legacy count+1 scheme would have handed out 3 again
        assert_eq!(fourth, 4);
        let ids: Vec<u32> = store.cars().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_update_car_replaces_fields() {
        let mut store = DealershipStore::new();
        let id = store.add_car(test_car("Toyota", "Camry"));
        let mut updated = store.car(id).unwrap().clone();
        updated.color = "Red".to_string();
        updated.price = 24000.0;
        store.update_car(updated).unwrap();
        assert_eq!(store.car(id).unwrap().color, "Red");
    }

    #[test]
    fn test_update_missing_car_errors() {
        let mut store = DealershipStore::new();
        let mut car = test_car("Toyota", "Camry");
        car.id = 42;
        assert!(matches!(
            store.update_car(car),
            Err(Error::NotFound { entity: "car", .. })
        ));
    }

    #[test]
    fn test_record_sale_marks_car_sold() {
        let mut store = DealershipStore::new();
        let customer_id = store.add_customer(test_customer("John Doe"));
        store.add_car(test_car("Toyota", "Camry"));
        store.add_car(test_car("Honda", "Accord"));
        let car_id = store.add_car(test_car("Ford", "Mustang"));

        let sale_id = store
            .record_sale(
                date("2023-05-15"),
                customer_id,
                car_id,
                42000.0,
                1,
                PaymentMethod::Cash,
            )
            .unwrap();

        assert_eq!(store.car(car_id).unwrap().status, CarStatus::Sold);
        let sale = store.sale(sale_id).unwrap();
        assert_eq!(sale.car_id, car_id);
        assert_eq!(sale.customer_id, customer_id);
    }

    #[test]
    fn test_record_sale_rejects_sold_car() {
        let mut store = DealershipStore::new();
        let car_id = store.add_car(test_car("Toyota", "Camry"));
        store
            .record_sale(date("2023-05-15"), 1, car_id, 25000.0, 1, PaymentMethod::Cash)
            .unwrap();

        let err = store
            .record_sale(date("2023-05-16"), 2, car_id, 25000.0, 1, PaymentMethod::Cash)
            .unwrap_err();
        assert!(matches!(err, Error::CarUnavailable { .. }));
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_record_sale_missing_car_errors() {
        let mut store = DealershipStore::new();
        assert!(matches!(
            store.record_sale(date("2023-05-15"), 1, 99, 25000.0, 1, PaymentMethod::Cash),
            Err(Error::NotFound { entity: "car", .. })
        ));
    }

    #[test]
    fn test_repository_traits_are_backed_by_the_store() {
        fn remove_first<R: CarRepository>(repo: &mut R) -> Result<()> {
            let first = repo.find_all().first().map(|c| c.id);
            match first {
                Some(id) => repo.remove(id),
                None => Ok(()),
            }
        }

        let mut store = DealershipStore::new();
        CarRepository::add(&mut store, test_car("Toyota", "Camry"));
        remove_first(&mut store).unwrap();
        assert!(CarRepository::find_all(&store).is_empty());
    }
}
