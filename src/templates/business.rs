//! Business/service template: about, services, contact, booking.

/// Feature labels shown to the user, in display order.
pub const FEATURES: &[&str] = &["About Us", "Services", "Contact", "Booking"];

/// Template sources keyed by relative path.
pub const FILES: &[(&str, &str)] = &[
    ("App.js", APP_JS),
    ("screens/HomeScreen.js", HOME_SCREEN_JS),
    ("screens/ServicesScreen.js", SERVICES_SCREEN_JS),
    ("screens/ContactScreen.js", CONTACT_SCREEN_JS),
    ("package.json", PACKAGE_JSON),
];

const APP_JS: &str = r#"import React from 'react';
import { NavigationContainer } from '@react-navigation/native';
import { createBottomTabNavigator } from '@react-navigation/bottom-tabs';
import HomeScreen from './screens/HomeScreen';
import ServicesScreen from './screens/ServicesScreen';
import ContactScreen from './screens/ContactScreen';

const Tab = createBottomTabNavigator();

export default function App() {
  return (
    <NavigationContainer>
      <Tab.Navigator>
        <Tab.Screen name="Home" component={HomeScreen} />
        <Tab.Screen name="Services" component={ServicesScreen} />
        <Tab.Screen name="Contact" component={ContactScreen} />
      </Tab.Navigator>
    </NavigationContainer>
  );
}"#;

const HOME_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, ScrollView, StyleSheet } from 'react-native';

export default function HomeScreen() {
  return (
    <ScrollView style={styles.container}>
      <View style={styles.hero}>
        <Text style={styles.title}>BUSINESS_NAME</Text>
        <Text style={styles.subtitle}>Your trusted service provider</Text>
      </View>

      <View style={styles.section}>
        <Text style={styles.sectionTitle}>About Us</Text>
        <Text style={styles.description}>
          We provide excellent service with over 10 years of experience.
          Our team is dedicated to delivering quality results for all our clients.
        </Text>
      </View>

      <View style={styles.section}>
        <Text style={styles.sectionTitle}>Why Choose Us?</Text>
        <Text style={styles.feature}>✓ Professional and reliable</Text>
        <Text style={styles.feature}>✓ Competitive pricing</Text>
        <Text style={styles.feature}>✓ 24/7 customer support</Text>
        <Text style={styles.feature}>✓ 100% satisfaction guarantee</Text>
      </View>
    </ScrollView>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
  },
  hero: {
    padding: 24,
    backgroundColor: 'THEME_PRIMARY',
    alignItems: 'center',
  },
  title: {
    fontSize: 28,
    fontWeight: 'bold',
    color: 'white',
    textAlign: 'center',
  },
  subtitle: {
    fontSize: 16,
    color: 'white',
    marginTop: 8,
    textAlign: 'center',
  },
  section: {
    padding: 20,
  },
  sectionTitle: {
    fontSize: 20,
    fontWeight: 'bold',
    color: 'THEME_PRIMARY',
    marginBottom: 12,
  },
  description: {
    fontSize: 16,
    lineHeight: 24,
    color: '#333',
  },
  feature: {
    fontSize: 16,
    color: '#333',
    marginBottom: 8,
    paddingLeft: 8,
  },
});"#;

const SERVICES_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, FlatList, StyleSheet } from 'react-native';

const services = [
  { id: 1, name: 'Consultation', description: 'Initial assessment and planning' },
  { id: 2, name: 'Implementation', description: 'Full-service delivery by our team' },
  { id: 3, name: 'Support', description: 'Ongoing maintenance and assistance' },
];

export default function ServicesScreen() {
  const renderService = ({ item }) => (
    <View style={styles.card}>
      <Text style={styles.cardTitle}>{item.name}</Text>
      <Text style={styles.cardDescription}>{item.description}</Text>
    </View>
  );

  return (
    <View style={styles.container}>
      <Text style={styles.title}>Our Services</Text>
      <FlatList
        data={services}
        renderItem={renderService}
        keyExtractor={item => item.id.toString()}
      />
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
    padding: 16,
  },
  title: {
    fontSize: 24,
    fontWeight: 'bold',
    color: 'THEME_PRIMARY',
    marginBottom: 16,
  },
  card: {
    backgroundColor: 'white',
    padding: 16,
    marginBottom: 12,
    borderRadius: 8,
  },
  cardTitle: {
    fontSize: 18,
    fontWeight: '600',
    color: '#333',
  },
  cardDescription: {
    fontSize: 14,
    color: '#666',
    marginTop: 4,
  },
});"#;

const CONTACT_SCREEN_JS: &str = r#"import React from 'react';
import { View, Text, TouchableOpacity, StyleSheet } from 'react-native';

export default function ContactScreen() {
  return (
    <View style={styles.container}>
      <Text style={styles.title}>Contact BUSINESS_NAME</Text>
      <Text style={styles.detail}>Phone: (555) 123-4567</Text>
      <Text style={styles.detail}>Email: hello@example.com</Text>
      <Text style={styles.detail}>Hours: Mon-Fri 9am-5pm</Text>
      <TouchableOpacity style={styles.bookButton}>
        <Text style={styles.bookButtonText}>Book an Appointment</Text>
      </TouchableOpacity>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: 'THEME_BACKGROUND',
    padding: 20,
  },
  title: {
    fontSize: 24,
    fontWeight: 'bold',
    color: 'THEME_PRIMARY',
    marginBottom: 16,
  },
  detail: {
    fontSize: 16,
    color: '#333',
    marginBottom: 8,
  },
  bookButton: {
    backgroundColor: 'THEME_SECONDARY',
    padding: 16,
    borderRadius: 8,
    marginTop: 24,
  },
  bookButtonText: {
    color: 'white',
    textAlign: 'center',
    fontSize: 16,
    fontWeight: '600',
  },
});"#;

const PACKAGE_JSON: &str = r#"{
  "name": "APP_IDENTIFIER",
  "version": "1.0.0",
  "main": "node_modules/expo/AppEntry.js",
  "scripts": {
    "start": "expo start",
    "android": "expo start --android",
    "ios": "expo start --ios",
    "web": "expo start --web"
  },
  "dependencies": {
    "expo": "~49.0.0",
    "react": "18.2.0",
    "react-native": "0.72.6",
    "@react-navigation/native": "^6.0.0",
    "@react-navigation/bottom-tabs": "^6.0.0",
    "react-native-screens": "~3.22.0",
    "react-native-safe-area-context": "4.6.3"
  },
  "devDependencies": {
    "@babel/core": "^7.20.0"
  }
}"#;
